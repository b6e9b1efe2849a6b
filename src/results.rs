//! Result wrappers for list and single-item API calls.
//!
//! Both wrappers are thin read-only views over decoded records that also
//! carry the request metadata (ETag, cache status) needed for conditional
//! follow-up requests. [`ListResult`] behaves like a slice of its items;
//! [`ItemResult`] dereferences to its single item.

use std::ops::Deref;

use crate::envelope::Envelope;
use crate::error::{OhgoError, Result};
use crate::traits::Resource;

/// An ordered collection of resources returned by a list endpoint.
///
/// Constructed once per top-level API call, after all pages are merged
/// when fetch-all was requested; immutable afterwards. An empty list is
/// a valid result, never an error.
#[derive(Debug, Clone)]
pub struct ListResult<T> {
    items: Vec<T>,
    etag: Option<String>,
    cached: bool,
}

impl<T: Resource> ListResult<T> {
    /// Parse every raw record in the envelope into `T`.
    pub(crate) fn from_envelope(envelope: Envelope) -> Result<Self> {
        let items = envelope
            .results
            .iter()
            .map(T::parse)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            items,
            etag: envelope.etag,
            cached: envelope.cached,
        })
    }
}

impl<T> ListResult<T> {
    /// Wrap an already-materialized item sequence.
    pub fn new(items: Vec<T>, etag: Option<String>, cached: bool) -> Self {
        Self {
            items,
            etag,
            cached,
        }
    }

    /// ETag of the response, usable for a conditional re-fetch.
    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    /// True when the server answered 304 and no new data was returned.
    pub fn cached(&self) -> bool {
        self.cached
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consume the wrapper, returning the items.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for ListResult<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for ListResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ListResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A single resource returned by an item endpoint.
///
/// Always holds exactly one item: a lookup that matched nothing fails
/// with [`OhgoError::NotFound`] at construction, so "does not exist" is
/// never conflated with "exists but empty".
#[derive(Debug, Clone)]
pub struct ItemResult<T> {
    item: T,
    etag: Option<String>,
    cached: bool,
}

impl<T: Resource> ItemResult<T> {
    /// Parse the first record of the envelope, failing with `NotFound`
    /// when the envelope holds no records.
    pub(crate) fn from_envelope(envelope: Envelope, id: &str) -> Result<Self> {
        let raw = envelope.results.first().ok_or_else(|| OhgoError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        })?;
        Ok(Self {
            item: T::parse(raw)?,
            etag: envelope.etag,
            cached: envelope.cached,
        })
    }
}

impl<T> ItemResult<T> {
    /// ETag of the response, usable for a conditional re-fetch.
    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    /// True when the server answered 304 and no new data was returned.
    pub fn cached(&self) -> bool {
        self.cached
    }

    /// Consume the wrapper, returning the item.
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> Deref for ItemResult<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.item
    }
}

impl<T> AsRef<T> for ItemResult<T> {
    fn as_ref(&self) -> &T {
        &self.item
    }
}
