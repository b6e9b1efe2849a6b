//! Query serialization trait.

/// Serialize filter options into wire query pairs.
///
/// Implementations emit only the options that are actually set; unset
/// options never reach the wire. Keys use the API's hyphenated form
/// (`page-size`, `map-bounds-sw`), tuple values are comma-joined, and
/// enum values serialize to their wire tag.
pub trait ToQuery {
    /// The wire query pairs, in declaration order.
    fn to_query(&self) -> Vec<(String, String)>;
}

/// No filters.
impl ToQuery for () {
    fn to_query(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}
