//! Construction project record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::envelope::Link;
use crate::images::Imagery;
use crate::traits::Resource;

/// A construction project. Carries no imagery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Construction {
    /// Hypermedia links for this record.
    pub links: Vec<Link>,
    /// Project ID.
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable location.
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Work category (e.g. "Road Construction").
    pub category: String,
    /// Affected travel direction.
    pub direction: String,
    /// ODOT district, when assigned.
    #[serde(default)]
    pub district: Option<String>,
    /// Affected route.
    pub route_name: String,
    /// Project status.
    pub status: String,
    /// Scheduled start, local time without offset.
    pub start_date: NaiveDateTime,
    /// Scheduled end, local time without offset.
    pub end_date: NaiveDateTime,
}

impl Resource for Construction {
    const ENDPOINT: &'static str = "construction";
    const KIND: &'static str = "construction";
}

impl Imagery for Construction {
    fn kind(&self) -> &'static str {
        Self::KIND
    }
}
