//! Resource record types, mapped one-to-one from the OHGO wire format.

mod camera;
mod construction;
mod dangerous_slowdown;
mod digital_sign;
mod incident;
mod travel_delay;
mod weather_sensor_site;

pub use camera::{Camera, CameraView};
pub use construction::Construction;
pub use dangerous_slowdown::DangerousSlowdown;
pub use digital_sign::DigitalSign;
pub use incident::Incident;
pub use travel_delay::TravelDelay;
pub use weather_sensor_site::{AtmosphericSensor, SurfaceSensor, WeatherSensorSite};
