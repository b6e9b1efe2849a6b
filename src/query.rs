//! Query parameter types and wire serialization.
//!
//! The OHGO API takes hyphenated query keys (`page-size`, `map-bounds-sw`)
//! with tuple values comma-joined. Enum-valued filters are coerced
//! leniently: an unrecognized string is passed through raw with a warning
//! rather than rejected, so the server decides what it accepts.

use crate::traits::ToQuery;

/// An enum whose variants have fixed wire tags.
pub trait WireEnum: Sized {
    /// Enum name used in coercion warnings.
    const NAME: &'static str;

    /// The wire tag of this variant.
    fn as_wire(&self) -> &'static str;

    /// Look up a variant by its wire tag.
    fn from_wire(s: &str) -> Option<Self>;
}

/// An enum-valued filter that tolerates unknown input.
///
/// Strings that match a known wire tag become `Known`; anything else is
/// preserved as `Raw` and sent to the server as-is, with a warning at
/// coercion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumParam<E> {
    /// A recognized variant.
    Known(E),
    /// Unrecognized input, passed through verbatim.
    Raw(String),
}

impl<E: WireEnum> EnumParam<E> {
    /// Coerce a string, falling back to raw passthrough with a warning.
    pub fn coerce(s: &str) -> Self {
        match E::from_wire(s) {
            Some(e) => Self::Known(e),
            None => {
                tracing::warn!(value = %s, "'{}' may not be a valid {}", s, E::NAME);
                Self::Raw(s.to_string())
            }
        }
    }

    /// The value as it goes on the wire.
    pub fn as_wire(&self) -> &str {
        match self {
            Self::Known(e) => e.as_wire(),
            Self::Raw(s) => s,
        }
    }
}

impl<E: WireEnum> From<E> for EnumParam<E> {
    fn from(e: E) -> Self {
        Self::Known(e)
    }
}

impl<E: WireEnum> From<&str> for EnumParam<E> {
    fn from(s: &str) -> Self {
        Self::coerce(s)
    }
}

/// A queryable region of Ohio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Akron,
    Cincinnati,
    Cleveland,
    Columbus,
    Dayton,
    Toledo,
    CentralOhio,
    NeOhio,
    NwOhio,
    SeOhio,
    SwOhio,
}

impl WireEnum for Region {
    const NAME: &'static str = "Region";

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Akron => "akron",
            Self::Cincinnati => "cincinnati",
            Self::Cleveland => "cleveland",
            Self::Columbus => "columbus",
            Self::Dayton => "dayton",
            Self::Toledo => "toledo",
            Self::CentralOhio => "central-ohio",
            Self::NeOhio => "ne-ohio",
            Self::NwOhio => "nw-ohio",
            Self::SeOhio => "se-ohio",
            Self::SwOhio => "sw-ohio",
        }
    }

    fn from_wire(s: &str) -> Option<Self> {
        Some(match s {
            "akron" => Self::Akron,
            "cincinnati" => Self::Cincinnati,
            "cleveland" => Self::Cleveland,
            "columbus" => Self::Columbus,
            "dayton" => Self::Dayton,
            "toledo" => Self::Toledo,
            "central-ohio" => Self::CentralOhio,
            "ne-ohio" => Self::NeOhio,
            "nw-ohio" => Self::NwOhio,
            "se-ohio" => Self::SeOhio,
            "sw-ohio" => Self::SwOhio,
            _ => return None,
        })
    }
}

/// Digital sign hardware type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignType {
    Dms,
    Queue,
}

impl WireEnum for SignType {
    const NAME: &'static str = "SignType";

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Dms => "dms",
            Self::Queue => "queue",
        }
    }

    fn from_wire(s: &str) -> Option<Self> {
        Some(match s {
            "dms" => Self::Dms,
            "queue" => Self::Queue,
            _ => return None,
        })
    }
}

/// Filter options shared by every list endpoint.
///
/// Unset fields are dropped before transmission.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    /// Region of Ohio to query.
    pub region: Option<EnumParam<Region>>,
    /// Southwest corner of a bounding box, `(lat, lon)`.
    pub map_bounds_sw: Option<(f64, f64)>,
    /// Northeast corner of a bounding box, `(lat, lon)`.
    pub map_bounds_ne: Option<(f64, f64)>,
    /// Results per page.
    pub page_size: Option<u32>,
    /// Page number to return.
    pub page: Option<u32>,
    /// Ask the server itself to return all pages.
    pub page_all: Option<bool>,
    /// Search radius around a point, `(lat, lon, radius)`.
    pub radius: Option<(f64, f64, f64)>,
}

impl ToQuery for QueryParams {
    fn to_query(&self) -> Vec<(String, String)> {
        if self.map_bounds_sw.is_some() != self.map_bounds_ne.is_some() {
            tracing::warn!("both map-bounds-sw and map-bounds-ne should be set");
        }

        let mut pairs = Vec::new();
        if let Some(region) = &self.region {
            pairs.push(("region".to_string(), region.as_wire().to_string()));
        }
        if let Some((lat, lon)) = self.map_bounds_sw {
            pairs.push(("map-bounds-sw".to_string(), join2(lat, lon)));
        }
        if let Some((lat, lon)) = self.map_bounds_ne {
            pairs.push(("map-bounds-ne".to_string(), join2(lat, lon)));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page-size".to_string(), page_size.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_all) = self.page_all {
            pairs.push(("page-all".to_string(), page_all.to_string()));
        }
        if let Some((lat, lon, radius)) = self.radius {
            pairs.push((
                "radius".to_string(),
                format!("{},{}", join2(lat, lon), coord(radius)),
            ));
        }
        pairs
    }
}

/// Filter options for the digital signs endpoint: everything in
/// [`QueryParams`] plus the sign type.
#[derive(Debug, Clone, Default)]
pub struct DigitalSignParams {
    /// Common filters.
    pub query: QueryParams,
    /// Sign hardware type.
    pub sign_type: Option<EnumParam<SignType>>,
}

impl ToQuery for DigitalSignParams {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = self.query.to_query();
        if let Some(sign_type) = &self.sign_type {
            pairs.push(("sign-type".to_string(), sign_type.as_wire().to_string()));
        }
        pairs
    }
}

// Debug formatting keeps the trailing `.0` the API's examples use
// (`-83.0`, not `-83`).
fn coord(v: f64) -> String {
    format!("{v:?}")
}

fn join2(lat: f64, lon: f64) -> String {
    format!("{},{}", coord(lat), coord(lon))
}
