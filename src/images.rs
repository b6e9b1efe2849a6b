//! Capability-based image fetching.
//!
//! OHGO resources expose imagery in three shapes: a view with one URL
//! per size (camera views), a resource with several ordered views
//! (cameras), and a resource with a flat list of image URLs (digital
//! signs). The [`Imagery`] trait dispatches on that capability rather
//! than on the concrete type name; resource kinds without a capability
//! inherit the default methods, which fail with
//! [`OhgoError::Unsupported`].

use async_trait::async_trait;

use crate::client::OhgoClient;
use crate::error::{OhgoError, Result};

/// Size variant of a camera view image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    /// Thumbnail rendition.
    #[default]
    Small,
    /// Full-size rendition.
    Large,
}

/// Fetches raw image bytes over the client's connection pool.
///
/// Image URLs are public; requests carry no API-key header.
#[derive(Debug, Clone, Copy)]
pub struct ImageFetcher<'a> {
    client: &'a OhgoClient,
}

impl<'a> ImageFetcher<'a> {
    pub(crate) fn new(client: &'a OhgoClient) -> Self {
        Self { client }
    }

    /// Fetch one image, propagating any failure.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.client.fetch_binary(url).await
    }

    /// Fetch one image, converting failure into `None`.
    ///
    /// The error is logged; this is the single place where a fetch
    /// failure is swallowed rather than surfaced.
    pub async fn try_fetch(&self, url: &str) -> Option<Vec<u8>> {
        match self.fetch(url).await {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                tracing::error!(%url, %error, "image fetch failed");
                None
            }
        }
    }
}

/// Image access for a resource, dispatched by capability.
///
/// Every resource kind implements this trait; kinds without imagery
/// keep the default methods and fail with
/// [`OhgoError::Unsupported`].
#[async_trait]
pub trait Imagery {
    /// Resource kind name used in error messages.
    fn kind(&self) -> &'static str;

    /// Fetch this resource's single image at the requested size.
    ///
    /// For multi-view resources this is the first view's image; a
    /// resource with zero views fails with
    /// [`OhgoError::EmptyResource`].
    async fn image(&self, fetcher: &ImageFetcher<'_>, size: ImageSize) -> Result<Vec<u8>> {
        let _ = (fetcher, size);
        Err(OhgoError::Unsupported {
            operation: "get_image",
            kind: self.kind(),
        })
    }

    /// Fetch all of this resource's images.
    ///
    /// Multi-view resources return one slot per view in view order,
    /// with `None` marking a failed fetch. Image-url-list resources
    /// omit failed fetches entirely, so their sequences never contain
    /// `None`. The asymmetry mirrors the API's own conventions and is
    /// intentional.
    async fn images(
        &self,
        fetcher: &ImageFetcher<'_>,
        size: ImageSize,
    ) -> Result<Vec<Option<Vec<u8>>>> {
        let _ = (fetcher, size);
        Err(OhgoError::Unsupported {
            operation: "get_images",
            kind: self.kind(),
        })
    }
}
