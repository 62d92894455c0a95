//! Search mode (the landing page tabs).

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown search mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid search mode: {0}")]
pub struct InvalidSearchMode(String);

/// What the user is searching for.
///
/// Only [`SearchMode::Bus`] has a working form; the other tabs render a
/// "No data" placeholder.
///
/// # Examples
///
/// ```
/// use trip_server::domain::SearchMode;
///
/// let mode: SearchMode = "hotel".parse().unwrap();
/// assert_eq!(mode, SearchMode::Hotel);
/// assert_eq!(mode.label(), "Hotel & Accommodation");
///
/// assert!("train".parse::<SearchMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchMode {
    #[default]
    Bus,
    Hotel,
    Flight,
}

impl SearchMode {
    /// All modes, in tab order.
    pub const ALL: [SearchMode; 3] = [SearchMode::Bus, SearchMode::Hotel, SearchMode::Flight];

    /// The wire value used in query parameters and tab links.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Bus => "bus",
            SearchMode::Hotel => "hotel",
            SearchMode::Flight => "flight",
        }
    }

    /// Human-readable tab label.
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::Bus => "Bus & Shuttle",
            SearchMode::Hotel => "Hotel & Accommodation",
            SearchMode::Flight => "Flight",
        }
    }

    /// Whether this mode has a search form behind it.
    pub fn has_form(&self) -> bool {
        matches!(self, SearchMode::Bus)
    }
}

impl FromStr for SearchMode {
    type Err = InvalidSearchMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bus" => Ok(SearchMode::Bus),
            "hotel" => Ok(SearchMode::Hotel),
            "flight" => Ok(SearchMode::Flight),
            other => Err(InvalidSearchMode(other.to_string())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
