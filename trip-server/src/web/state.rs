//! Application state for the web layer.

use std::sync::Arc;

use crate::form::ValidationPolicy;
use crate::locations::Locations;

/// Shared application state.
///
/// Read-only after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Location lookup table
    pub locations: Arc<Locations>,

    /// Optional validation rules applied on submit
    pub policy: ValidationPolicy,
}

impl AppState {
    /// Create a new app state.
    pub fn new(locations: Locations, policy: ValidationPolicy) -> Self {
        Self {
            locations: Arc::new(locations),
            policy,
        }
    }
}
