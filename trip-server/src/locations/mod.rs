//! Static location table.
//!
//! Provides code → location lookup over a fixed dataset loaded from a JSON
//! file once at startup. The table is never mutated afterwards, so it is
//! shared between requests behind an `Arc` without locking.

mod error;
mod table;

pub use error::LocationsError;
pub use table::{Location, Locations};
