//! Location records and the lookup table.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::LocationsError;

/// A place that can be picked as origin or destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Location {
    /// Short unique code, the canonical key in lookups and query parameters
    pub short_code: String,
    /// Display name
    pub english_name: String,
    /// Administrative region (informational only)
    pub code_state: String,
}

impl Location {
    /// Create a new location record.
    pub fn new(
        short_code: impl Into<String>,
        english_name: impl Into<String>,
        code_state: impl Into<String>,
    ) -> Self {
        Self {
            short_code: short_code.into(),
            english_name: english_name.into(),
            code_state: code_state.into(),
        }
    }
}

/// Read-only, ordered location table.
///
/// Codes are assumed unique but the dataset does not guarantee it; when a
/// code repeats, lookups return the first record carrying it.
#[derive(Debug, Clone, Default)]
pub struct Locations {
    records: Vec<Location>,
    /// Code → index of the first record with that code.
    by_code: HashMap<String, usize>,
}

impl Locations {
    /// Build a table from records, keeping their order.
    pub fn from_records(records: Vec<Location>) -> Self {
        let mut by_code = HashMap::with_capacity(records.len());
        for (i, loc) in records.iter().enumerate() {
            if by_code.contains_key(&loc.short_code) {
                debug!(code = %loc.short_code, "duplicate location code, keeping first");
                continue;
            }
            by_code.insert(loc.short_code.clone(), i);
        }
        Self { records, by_code }
    }

    /// Parse a table from a JSON array of location records.
    pub fn from_json(json: &str) -> Result<Self, LocationsError> {
        let records: Vec<Location> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Load the table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LocationsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LocationsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&json)?;
        if table.is_empty() {
            warn!(path = %path.display(), "location dataset is empty");
        }
        Ok(table)
    }

    /// Look up a location by exact code.
    pub fn find_by_code(&self, code: &str) -> Option<&Location> {
        self.by_code.get(code).map(|&i| &self.records[i])
    }

    /// Display name for a code, falling back to the code itself.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.find_by_code(code)
            .map(|loc| loc.english_name.as_str())
            .unwrap_or(code)
    }

    /// Search by display name or code, case-insensitively.
    ///
    /// Returns matches in dataset order, at most `limit` of them. A blank
    /// query matches everything.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Location> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|loc| {
                needle.is_empty()
                    || loc.english_name.to_lowercase().contains(&needle)
                    || loc.short_code.to_lowercase().contains(&needle)
            })
            .take(limit)
            .collect()
    }

    /// All records in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.records.iter()
    }

    /// Number of records (duplicates included).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
