//! Web layer for the trip search frontend.
//!
//! Serves the landing page with the search form, accepts form submissions,
//! and renders the results page from query parameters.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{RESULTS_ROUTE, create_router};
pub use state::AppState;
pub use templates::*;
