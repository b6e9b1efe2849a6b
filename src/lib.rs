//! OHGO API client library.
//!
//! A Rust library for the OHGO public traffic API, which exposes Ohio's
//! traffic infrastructure: cameras, digital signs, construction,
//! incidents, weather sensor sites, dangerous slowdowns and travel
//! delays.
//!
//! # Quick Start
//!
//! ```no_run
//! use ohgo::{ImageSize, ListOptions, OhgoClient, QueryParams, Region};
//!
//! #[tokio::main]
//! async fn main() -> ohgo::Result<()> {
//!     // Create client from environment variables
//!     let client = OhgoClient::from_env()?;
//!
//!     // List cameras around Columbus, walking every page
//!     let params = QueryParams {
//!         region: Some(Region::Columbus.into()),
//!         ..Default::default()
//!     };
//!     let cameras = client.get_cameras(&params, &ListOptions::all()).await?;
//!     println!("Found {} cameras", cameras.len());
//!
//!     // Fetch one camera and its first view's image
//!     let camera = client.get_camera(&cameras[0].id).await?;
//!     let jpeg = client.get_image(&*camera, ImageSize::Large).await?;
//!     println!("{} bytes", jpeg.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Every endpoint wraps its payload in a common envelope
//! ([`Envelope`]): pagination links, total count, the result array and
//! any rejected filters. [`OhgoClient`] decodes the envelope, follows
//! `next-page` links when asked to, and returns [`ListResult`] /
//! [`ItemResult`] wrappers that carry the items plus request metadata
//! (ETag, cache status).
//!
//! Image access is dispatched by capability through the [`Imagery`]
//! trait: camera views fetch one URL per size, cameras fan out over
//! their views, digital signs fetch their URL list. Resource kinds
//! without imagery fail with [`OhgoError::Unsupported`].
//!
//! # Configuration
//!
//! [`OhgoClient::from_env`] reads:
//!
//! - `OHGO_API_KEY` (required) - Your OHGO API key
//! - `OHGO_API_URL` (optional) - Base URL (defaults to
//!   `https://publicapi.ohgo.com/api/v1/`)

mod client;
mod envelope;
mod error;
mod images;
mod models;
mod query;
mod results;
mod traits;

// Re-export core types
pub use client::{ListOptions, OhgoClient, OhgoClientBuilder};
pub use envelope::{Envelope, Link, RejectedFilter};
pub use error::{OhgoError, Result};
pub use images::{ImageFetcher, ImageSize, Imagery};
pub use results::{ItemResult, ListResult};

// Re-export traits
pub use traits::{Resource, ToQuery};

// Re-export query types
pub use query::{DigitalSignParams, EnumParam, QueryParams, Region, SignType, WireEnum};

// Re-export models
pub use models::{
    AtmosphericSensor,
    Camera,
    CameraView,
    Construction,
    DangerousSlowdown,
    DigitalSign,
    Incident,
    SurfaceSensor,
    TravelDelay,
    WeatherSensorSite,
};
