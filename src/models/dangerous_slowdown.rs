//! Dangerous slowdown record.

use serde::{Deserialize, Serialize};

use crate::envelope::Link;
use crate::images::Imagery;
use crate::traits::Resource;

/// A stretch of road where traffic speed has dropped sharply. Carries
/// no imagery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerousSlowdown {
    /// Hypermedia links for this record.
    pub links: Vec<Link>,
    /// Slowdown ID.
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable location.
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Affected travel direction.
    pub direction: String,
    /// Affected route.
    pub route_name: String,
}

impl Resource for DangerousSlowdown {
    const ENDPOINT: &'static str = "dangerous-slowdowns";
    const KIND: &'static str = "dangerous slowdown";
}

impl Imagery for DangerousSlowdown {
    fn kind(&self) -> &'static str {
        Self::KIND
    }
}
