//! Incident record.

use serde::{Deserialize, Serialize};

use crate::envelope::Link;
use crate::images::Imagery;
use crate::traits::Resource;

/// A reported traffic incident. Carries no imagery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Hypermedia links for this record.
    pub links: Vec<Link>,
    /// Incident ID.
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable location.
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Incident category (e.g. "Crash").
    pub category: String,
    /// Affected travel direction.
    pub direction: String,
    /// ODOT district, when assigned.
    #[serde(default)]
    pub district: Option<String>,
    /// Affected route.
    pub route_name: String,
}

impl Resource for Incident {
    const ENDPOINT: &'static str = "incidents";
    const KIND: &'static str = "incident";
}

impl Imagery for Incident {
    fn kind(&self) -> &'static str {
        Self::KIND
    }
}
