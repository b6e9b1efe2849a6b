//! Resource trait tying record types to their API endpoint.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{OhgoError, Result};

/// An OHGO resource record.
///
/// Each record type maps one-to-one onto the JSON items inside the
/// response envelope and names the endpoint it is served from. The
/// default `parse`/`serialize` pair is serde-backed; implementors only
/// supply the two constants.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + Sized {
    /// Endpoint path relative to the API base, e.g. `"cameras"`.
    const ENDPOINT: &'static str;

    /// Human-readable kind name used in error messages.
    const KIND: &'static str;

    /// Parse a raw envelope record into this type.
    ///
    /// # Errors
    ///
    /// Returns [`OhgoError::Decode`] when the record does not match the
    /// wire shape of this resource.
    fn parse(raw: &Value) -> Result<Self> {
        serde_json::from_value(raw.clone()).map_err(OhgoError::Decode)
    }

    /// Serialize this record back to its wire shape.
    fn serialize(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(OhgoError::Decode)
    }
}
