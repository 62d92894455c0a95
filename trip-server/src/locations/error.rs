//! Location dataset error types.

use std::path::PathBuf;

/// Errors that can occur when loading the location dataset.
#[derive(Debug, thiserror::Error)]
pub enum LocationsError {
    /// The dataset file could not be read
    #[error("failed to read locations from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of location records
    #[error("invalid locations JSON: {0}")]
    Json(#[from] serde_json::Error),
}
