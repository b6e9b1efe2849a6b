//! Weather sensor site record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::envelope::Link;
use crate::images::Imagery;
use crate::traits::Resource;

/// Readings from one atmospheric sensor at a site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtmosphericSensor {
    pub air_temperature: f64,
    pub dewpoint_temperature: f64,
    pub humidity: f64,
    pub average_wind_speed: f64,
    pub maximum_wind_speed: f64,
    pub wind_direction: String,
    pub precipitation: String,
    pub precipitation_rate: f64,
    pub visibility: f64,
    /// Time of the reading, local time without offset.
    pub last_update: NaiveDateTime,
}

/// Readings from one road surface sensor at a site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceSensor {
    pub name: String,
    pub status: String,
    pub surface_temperature: f64,
    pub sub_surface_temperature: f64,
    /// Time of the reading, local time without offset.
    pub last_update: NaiveDateTime,
}

/// A roadside weather station. Carries no imagery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSensorSite {
    /// Hypermedia links for this record.
    pub links: Vec<Link>,
    /// Site ID.
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Human-readable location.
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the site currently reports severe conditions.
    pub severe: bool,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub average_air_temperature: Option<String>,
    pub atmospheric_sensors: Vec<AtmosphericSensor>,
    pub surface_sensors: Vec<SurfaceSensor>,
}

impl Resource for WeatherSensorSite {
    const ENDPOINT: &'static str = "weather-sensor-sites";
    const KIND: &'static str = "weather sensor site";
}

impl Imagery for WeatherSensorSite {
    fn kind(&self) -> &'static str {
        Self::KIND
    }
}
