//! Trait definitions shared by the client and the resource records.

mod query;
mod resource;

pub use query::ToQuery;
pub use resource::Resource;
