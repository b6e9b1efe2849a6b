//! The OHGO response envelope.
//!
//! Every OHGO endpoint wraps its payload in a common envelope carrying
//! pagination links, a total result count, the result array, and any
//! query filters the server rejected. The envelope is decoded once per
//! response; pagination continuation is resolved eagerly at decode time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{OhgoError, Result};

/// Link relation marking the pagination continuation URL.
const NEXT_PAGE_REL: &str = "next-page";

/// A hypermedia link attached to an envelope or a resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Absolute URL of the linked resource.
    pub href: String,
    /// Relation of the link to its owner (e.g. `self`, `next-page`).
    pub rel: String,
}

/// A query filter the server refused to apply.
///
/// Rejected filters are advisory: the request still succeeds, minus the
/// offending filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectedFilter {
    /// The query key that was rejected.
    pub key: String,
    /// The value that was supplied for it.
    pub value: Value,
    /// The server's explanation.
    pub error: String,
}

/// Wire shape of the envelope. Every field is required: the API always
/// includes these keys, so absence is a contract violation, not a zero
/// value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEnvelope {
    links: Vec<Link>,
    total_result_count: u64,
    results: Vec<Value>,
    rejected_filters: Vec<RejectedFilter>,
}

/// A decoded OHGO response.
///
/// `status` and `message` come from the HTTP response line; the rest is
/// decoded from the JSON body. After a fetch-all pagination walk only
/// `results` accumulates across pages; `status`, `message` and
/// `total_result_count` keep their first-page values (see
/// [`crate::OhgoClient`]).
#[derive(Debug, Clone)]
pub struct Envelope {
    /// HTTP status code of the (first) response.
    pub status: u16,
    /// HTTP reason phrase of the (first) response.
    pub message: String,
    /// Links from the most recently decoded page.
    pub links: Vec<Link>,
    /// Server-reported total across all pages, from the first page.
    pub total_result_count: u64,
    /// Raw result records, accumulated across pages on a fetch-all walk.
    pub results: Vec<Value>,
    /// Filters the server rejected, from the first page.
    pub rejected_filters: Vec<RejectedFilter>,
    /// Continuation URL, resolved eagerly from `links` at decode time.
    pub next_page: Option<String>,
    /// ETag of the response, when the server supplied one.
    pub etag: Option<String>,
    /// True when this envelope stands in for an HTTP 304 short-circuit.
    pub cached: bool,
}

impl Envelope {
    /// Decode an envelope from a parsed JSON body.
    ///
    /// Fails with [`OhgoError::Decode`] if any of `links`,
    /// `totalResultCount`, `results` or `rejectedFilters` is absent.
    /// Rejected filters are reported as warnings here, once, and never
    /// fail the call.
    pub fn decode(status: u16, message: &str, body: Value) -> Result<Self> {
        let wire: WireEnvelope = serde_json::from_value(body).map_err(OhgoError::Decode)?;

        for filter in &wire.rejected_filters {
            tracing::warn!(
                key = %filter.key,
                value = %filter.value,
                error = %filter.error,
                "query filter rejected by server"
            );
        }

        let next_page = find_next_page(&wire.links);
        Ok(Self {
            status,
            message: message.to_string(),
            links: wire.links,
            total_result_count: wire.total_result_count,
            results: wire.results,
            rejected_filters: wire.rejected_filters,
            next_page,
            etag: None,
            cached: false,
        })
    }

    /// An empty envelope standing in for an HTTP 304 Not Modified
    /// response. Carries no results; `cached` is set so the result
    /// wrappers can report the short-circuit.
    pub fn not_modified(etag: Option<String>) -> Self {
        Self {
            status: 304,
            message: "Not Modified".to_string(),
            links: Vec::new(),
            total_result_count: 0,
            results: Vec::new(),
            rejected_filters: Vec::new(),
            next_page: None,
            etag,
            cached: true,
        }
    }

    /// Append a continuation page, adopting its link set for the next
    /// iteration test. Everything except `results`, `links` and
    /// `next_page` keeps its current (first-page) value.
    pub fn absorb_page(&mut self, page: Envelope) {
        self.results.extend(page.results);
        self.links = page.links;
        self.next_page = page.next_page;
    }
}

fn find_next_page(links: &[Link]) -> Option<String> {
    links
        .iter()
        .find(|link| link.rel == NEXT_PAGE_REL)
        .map(|link| link.href.clone())
}
