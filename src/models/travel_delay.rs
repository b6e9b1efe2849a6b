//! Travel delay record.

use serde::{Deserialize, Serialize};

use crate::envelope::Link;
use crate::images::Imagery;
use crate::traits::Resource;

/// A measured delay along a route segment. Carries no imagery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelDelay {
    /// Hypermedia links for this record.
    pub links: Vec<Link>,
    /// Delay ID.
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

impl Resource for TravelDelay {
    const ENDPOINT: &'static str = "travel-delays";
    const KIND: &'static str = "travel delay";
}

impl Imagery for TravelDelay {
    fn kind(&self) -> &'static str {
        Self::KIND
    }
}
