//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::parse_iso_date;
use crate::form::{FieldEdit, FieldErrors, SearchForm};
use crate::locations::Location;

/// Query for the landing page.
#[derive(Debug, Default, Deserialize)]
pub struct IndexRequest {
    /// Selected tab (`bus`, `hotel` or `flight`)
    pub tab: Option<String>,
}

/// Bus search form as posted by the browser.
///
/// Every field is optional on the wire; blanks mean "not picked".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchFormSubmission {
    /// Origin location code
    pub from: String,

    /// Destination location code
    pub to: String,

    /// Departure date, `YYYY-MM-DD`
    pub departure_date: String,

    /// Round trip checkbox; browsers send `on` when ticked and nothing otherwise
    pub round_trip: Option<String>,

    /// Return date, `YYYY-MM-DD`
    pub return_date: String,

    /// Raw passenger input
    pub passengers: Option<String>,
}

impl SearchFormSubmission {
    /// Whether the round trip checkbox was ticked.
    pub fn is_round_trip(&self) -> bool {
        self.round_trip
            .as_deref()
            .is_some_and(|v| !matches!(v, "" | "off" | "false" | "0"))
    }

    /// Replay the submission onto a fresh form.
    ///
    /// The toggle is applied before the return date so that a return date
    /// sent with the checkbox unticked is dropped, as the disabled picker
    /// would.
    pub fn to_form(&self) -> SearchForm {
        let mut form = SearchForm::new();
        form.apply(FieldEdit::From(self.from.trim().to_string()));
        form.apply(FieldEdit::To(self.to.trim().to_string()));
        form.apply(FieldEdit::DepartureDate(parse_iso_date(&self.departure_date)));
        form.set_round_trip(self.is_round_trip());
        if self.is_round_trip() {
            form.apply(FieldEdit::ReturnDate(parse_iso_date(&self.return_date)));
        }
        if let Some(raw) = &self.passengers {
            form.apply(FieldEdit::passengers_input(raw));
        }
        form
    }
}

/// Request to search locations (combobox).
#[derive(Debug, Deserialize)]
pub struct LocationSearchRequest {
    /// Search query (name or code)
    #[serde(default)]
    pub q: String,

    /// Maximum results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A location in search results.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    /// Location code
    pub code: String,

    /// Display name
    pub name: String,

    /// Region code
    pub region: String,
}

impl From<&Location> for LocationResult {
    fn from(loc: &Location) -> Self {
        Self {
            code: loc.short_code.clone(),
            name: loc.english_name.clone(),
            region: loc.code_state.clone(),
        }
    }
}

/// Response for location search.
#[derive(Debug, Serialize)]
pub struct LocationSearchResponse {
    /// Matching locations, in dataset order
    pub locations: Vec<LocationResult>,
}

/// Accepted search (non-HTML clients).
#[derive(Debug, Serialize)]
pub struct SearchAccepted {
    /// Results URL to navigate to
    pub location: String,
}

/// Rejected search (non-HTML clients).
#[derive(Debug, Serialize)]
pub struct SearchRejected {
    /// Message per invalid field
    pub errors: FieldErrors,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SearchFormState;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn submission() -> SearchFormSubmission {
        SearchFormSubmission {
            from: "HCM".into(),
            to: "HAN".into(),
            departure_date: "2025-07-01".into(),
            round_trip: Some("on".into()),
            return_date: "2025-07-10".into(),
            passengers: Some("3".into()),
        }
    }

    #[test]
    fn round_trip_checkbox_values() {
        let with = |v: Option<&str>| SearchFormSubmission {
            round_trip: v.map(str::to_string),
            ..SearchFormSubmission::default()
        };
        assert!(with(Some("on")).is_round_trip());
        assert!(with(Some("true")).is_round_trip());
        assert!(!with(Some("")).is_round_trip());
        assert!(!with(Some("off")).is_round_trip());
        assert!(!with(None).is_round_trip());
    }

    #[test]
    fn to_form_round_trip() {
        let form = submission().to_form();
        let expected = SearchFormState {
            from: "HCM".into(),
            to: "HAN".into(),
            departure_date: Some(date(2025, 7, 1)),
            is_round_trip: true,
            return_date: Some(date(2025, 7, 10)),
            passengers: Some(3),
            ..SearchFormState::default()
        };
        assert_eq!(form.state(), &expected);
    }

    #[test]
    fn to_form_drops_return_date_when_one_way() {
        let sub = SearchFormSubmission {
            round_trip: None,
            ..submission()
        };
        let form = sub.to_form();
        assert!(!form.is_round_trip());
        assert_eq!(form.state().return_date, None);
    }

    #[test]
    fn to_form_coerces_inputs() {
        let sub = SearchFormSubmission {
            departure_date: "01/07/2025".into(),
            passengers: Some("abc".into()),
            ..submission()
        };
        let form = sub.to_form();
        assert_eq!(form.state().departure_date, None);
        assert_eq!(form.state().passengers, Some(1));
    }

    #[test]
    fn to_form_keeps_default_passengers_when_missing() {
        let sub = SearchFormSubmission {
            passengers: None,
            ..submission()
        };
        assert_eq!(sub.to_form().state().passengers, Some(1));
    }

    #[test]
    fn to_form_trims_location_codes() {
        let sub = SearchFormSubmission {
            from: " HCM ".into(),
            to: "   ".into(),
            ..submission()
        };
        let form = sub.to_form();
        assert_eq!(form.state().from, "HCM");
        assert_eq!(form.state().to, "");
    }

    #[test]
    fn location_result_from_location() {
        let loc = Location::new("DAD", "Da Nang", "VN-DN");
        let result = LocationResult::from(&loc);
        assert_eq!(result.code, "DAD");
        assert_eq!(result.name, "Da Nang");
        assert_eq!(result.region, "VN-DN");
    }
}
