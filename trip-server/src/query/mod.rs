//! Search query encoding and decoding.
//!
//! A validated form is flattened into string parameters for navigation.
//! The results view rebuilds a display summary from those parameters alone;
//! no in-memory state crosses the redirect.

mod error;
mod params;
mod summary;

pub use error::QueryError;
pub use params::{EncodedSearchParams, encode};
pub use summary::{DisplayableSearchSummary, SearchQuery, decode};
