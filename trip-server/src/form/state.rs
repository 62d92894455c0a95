//! Form state and field edits.

use chrono::NaiveDate;

use crate::domain::{DEFAULT_PASSENGERS, SearchMode, coerce_passenger_input};

use super::field::Field;

/// Everything the bus search form holds.
///
/// Owned by exactly one [`SearchForm`](super::SearchForm) for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFormState {
    /// Always [`SearchMode::Bus`] for this form
    pub mode: SearchMode,

    /// Origin location code, empty until picked
    pub from: String,

    /// Destination location code, empty until picked
    pub to: String,

    pub departure_date: Option<NaiveDate>,

    /// Whether a return date may be picked
    pub is_round_trip: bool,

    /// Only ever set while `is_round_trip` is true
    pub return_date: Option<NaiveDate>,

    /// Passenger count; `None` means the input was not a number at all.
    /// The input coercion never produces `None`, but callers building a
    /// state directly can.
    pub passengers: Option<i64>,
}

impl Default for SearchFormState {
    fn default() -> Self {
        Self {
            mode: SearchMode::Bus,
            from: String::new(),
            to: String::new(),
            departure_date: None,
            is_round_trip: false,
            return_date: None,
            passengers: Some(DEFAULT_PASSENGERS),
        }
    }
}

/// A single-field edit coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Origin picked (empty string clears it)
    From(String),
    /// Destination picked (empty string clears it)
    To(String),
    DepartureDate(Option<NaiveDate>),
    ReturnDate(Option<NaiveDate>),
    Passengers(Option<i64>),
}

impl FieldEdit {
    /// Build a passenger edit from raw input text, coercing it the way the
    /// number input does.
    pub fn passengers_input(raw: &str) -> Self {
        FieldEdit::Passengers(Some(coerce_passenger_input(raw)))
    }

    /// The field this edit touches.
    pub fn field(&self) -> Field {
        match self {
            FieldEdit::From(_) => Field::From,
            FieldEdit::To(_) => Field::To,
            FieldEdit::DepartureDate(_) => Field::DepartureDate,
            FieldEdit::ReturnDate(_) => Field::ReturnDate,
            FieldEdit::Passengers(_) => Field::Passengers,
        }
    }
}
