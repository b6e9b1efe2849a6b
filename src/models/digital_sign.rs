//! Digital sign record and its image capability.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::envelope::Link;
use crate::error::Result;
use crate::images::{ImageFetcher, ImageSize, Imagery};
use crate::traits::Resource;

/// A roadside digital message sign.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalSign {
    /// Hypermedia links for this record.
    pub links: Vec<Link>,
    /// Sign ID.
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable location.
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Sign hardware type name.
    pub sign_type_name: String,
    /// Messages currently displayed.
    pub messages: Vec<String>,
    /// Rendered images of the displayed messages.
    pub image_urls: Vec<String>,
}

impl Resource for DigitalSign {
    const ENDPOINT: &'static str = "digital-signs";
    const KIND: &'static str = "digital sign";
}

#[async_trait]
impl Imagery for DigitalSign {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    /// One entry per URL that fetched successfully; failures are
    /// omitted (never a `None` slot), so the sequence may be shorter
    /// than `image_urls`. Relative order among successes is preserved.
    /// Signs have a single rendition, so `size` is ignored.
    async fn images(
        &self,
        fetcher: &ImageFetcher<'_>,
        _size: ImageSize,
    ) -> Result<Vec<Option<Vec<u8>>>> {
        let mut images = Vec::with_capacity(self.image_urls.len());
        for url in &self.image_urls {
            if let Some(bytes) = fetcher.try_fetch(url).await {
                images.push(Some(bytes));
            }
        }
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_digital_sign_deserialize() {
        let raw = json!({
            "links": [],
            "id": "1234",
            "latitude": 39.1,
            "longitude": -84.5,
            "location": "I-75 NB at Mitchell Ave",
            "description": "I-75 NB DMS",
            "signTypeName": "DMS",
            "messages": ["CRASH AHEAD", "USE CAUTION"],
            "imageUrls": ["https://img.example/sign-1234.png"]
        });
        let sign = DigitalSign::parse(&raw).unwrap();
        assert_eq!(sign.id, "1234");
        assert_eq!(sign.sign_type_name, "DMS");
        assert_eq!(sign.messages.len(), 2);
        assert_eq!(sign.image_urls.len(), 1);
    }
}
