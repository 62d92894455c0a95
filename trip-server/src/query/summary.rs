//! Decoding search parameters for display.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::locations::Locations;

use super::params::EncodedSearchParams;

/// Search parameters as received by the results view.
///
/// Every key is optional: the view must cope with hand-edited or truncated
/// URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    pub mode: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub dep: Option<String>,
    pub ret: Option<String>,
    pub passengers: Option<String>,
}

impl SearchQuery {
    /// Parse a raw query string.
    ///
    /// Never fails: unknown keys are ignored and, when a key repeats, its
    /// first value is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_server::query::SearchQuery;
    ///
    /// let q = SearchQuery::parse("from=HCM&from=HAN&junk=1&dep=2025-06-15");
    /// assert_eq!(q.from.as_deref(), Some("HCM"));
    /// assert_eq!(q.dep.as_deref(), Some("2025-06-15"));
    /// assert_eq!(q.to, None);
    /// ```
    pub fn parse(query: &str) -> Self {
        let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(query) {
            Ok(pairs) => pairs,
            Err(e) => {
                debug!(error = %e, "unreadable search query, treating as empty");
                return Self::default();
            }
        };

        let mut parsed = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "mode" => &mut parsed.mode,
                "from" => &mut parsed.from,
                "to" => &mut parsed.to,
                "dep" => &mut parsed.dep,
                "ret" => &mut parsed.ret,
                "passengers" => &mut parsed.passengers,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        parsed
    }
}

impl From<&EncodedSearchParams> for SearchQuery {
    fn from(params: &EncodedSearchParams) -> Self {
        Self {
            mode: Some(params.mode.clone()),
            from: Some(params.from.clone()),
            to: Some(params.to.clone()),
            dep: Some(params.dep.clone()),
            ret: params.ret.clone(),
            passengers: Some(params.passengers.clone()),
        }
    }
}

/// Read-only search summary for the results view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayableSearchSummary {
    pub mode: String,
    pub from_code: String,
    /// Location name, or the raw code when the lookup misses
    pub from_name: String,
    pub to_code: String,
    pub to_name: String,
    /// Departure date exactly as received
    pub departure_date: String,
    /// Return date exactly as received; `None` when absent or empty
    pub return_date: Option<String>,
    pub passengers: String,
}

/// Build a display summary from received parameters.
///
/// Total: missing keys display as blanks, unknown codes display verbatim,
/// and dates are not re-parsed.
pub fn decode(query: &SearchQuery, locations: &Locations) -> DisplayableSearchSummary {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();

    let from_code = text(&query.from);
    let to_code = text(&query.to);

    DisplayableSearchSummary {
        mode: text(&query.mode),
        from_name: locations.display_name(&from_code).to_string(),
        to_name: locations.display_name(&to_code).to_string(),
        from_code,
        to_code,
        departure_date: text(&query.dep),
        return_date: query.ret.clone().filter(|r| !r.is_empty()),
        passengers: text(&query.passengers),
    }
}
