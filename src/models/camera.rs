//! Camera record and its image capabilities.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::envelope::Link;
use crate::error::{OhgoError, Result};
use crate::images::{ImageFetcher, ImageSize, Imagery};
use crate::traits::Resource;

/// One mounted view of a traffic camera.
///
/// Each view carries a small and a large image URL; both are public,
/// pre-signed by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraView {
    /// Direction the view faces (e.g. "North").
    pub direction: String,
    /// Thumbnail image URL.
    pub small_url: String,
    /// Full-size image URL.
    pub large_url: String,
    /// The route this view covers.
    pub main_route: String,
}

impl CameraView {
    /// The image URL for the requested size.
    pub fn url_for(&self, size: ImageSize) -> &str {
        match size {
            ImageSize::Small => &self.small_url,
            ImageSize::Large => &self.large_url,
        }
    }
}

/// A traffic camera, possibly with several mounted views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    /// Hypermedia links for this record.
    pub links: Vec<Link>,
    /// Camera ID.
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable location.
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Mounted views, in the API's order.
    pub camera_views: Vec<CameraView>,
}

impl Resource for Camera {
    const ENDPOINT: &'static str = "cameras";
    const KIND: &'static str = "camera";
}

#[async_trait]
impl Imagery for CameraView {
    fn kind(&self) -> &'static str {
        "camera view"
    }

    async fn image(&self, fetcher: &ImageFetcher<'_>, size: ImageSize) -> Result<Vec<u8>> {
        fetcher.fetch(self.url_for(size)).await
    }
}

#[async_trait]
impl Imagery for Camera {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// The first view's image; a camera with zero views has nothing to
    /// fetch, which is distinct from a fetch that failed in transit.
    async fn image(&self, fetcher: &ImageFetcher<'_>, size: ImageSize) -> Result<Vec<u8>> {
        let view = self
            .camera_views
            .first()
            .ok_or_else(|| OhgoError::EmptyResource {
                kind: Self::KIND,
                id: self.id.clone(),
            })?;
        view.image(fetcher, size).await
    }

    /// One slot per view, in view order; a failed fetch leaves a `None`
    /// marker so positional correspondence with the views is retained.
    async fn images(
        &self,
        fetcher: &ImageFetcher<'_>,
        size: ImageSize,
    ) -> Result<Vec<Option<Vec<u8>>>> {
        let mut images = Vec::with_capacity(self.camera_views.len());
        for view in &self.camera_views {
            images.push(fetcher.try_fetch(view.url_for(size)).await);
        }
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camera_deserialize() {
        let raw = json!({
            "links": [{"href": "https://publicapi.ohgo.com/api/v1/cameras/cam-1", "rel": "self"}],
            "id": "cam-1",
            "latitude": 39.9612,
            "longitude": -82.9988,
            "location": "I-70 at Broad St",
            "description": "I-70 EB past Broad St",
            "cameraViews": [
                {
                    "direction": "East",
                    "smallUrl": "https://img.example/cam-1-e-small.jpg",
                    "largeUrl": "https://img.example/cam-1-e-large.jpg",
                    "mainRoute": "I-70"
                }
            ]
        });
        let camera = Camera::parse(&raw).unwrap();
        assert_eq!(camera.id, "cam-1");
        assert_eq!(camera.camera_views.len(), 1);
        assert_eq!(camera.camera_views[0].direction, "East");
    }

    #[test]
    fn test_camera_serialize_round_trip() {
        let raw = json!({
            "links": [],
            "id": "cam-2",
            "latitude": 41.49,
            "longitude": -81.69,
            "location": "I-90 at E 9th",
            "description": "",
            "cameraViews": []
        });
        let camera = Camera::parse(&raw).unwrap();
        assert_eq!(Resource::serialize(&camera).unwrap(), raw);
    }

    #[test]
    fn test_view_url_for_size() {
        let view = CameraView {
            direction: "North".to_string(),
            small_url: "https://img.example/s.jpg".to_string(),
            large_url: "https://img.example/l.jpg".to_string(),
            main_route: "SR-315".to_string(),
        };
        assert_eq!(view.url_for(ImageSize::Small), "https://img.example/s.jpg");
        assert_eq!(view.url_for(ImageSize::Large), "https://img.example/l.jpg");
    }
}
