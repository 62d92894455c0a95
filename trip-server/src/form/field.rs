//! Form field identifiers.

use std::fmt;

use serde::Serialize;

/// A field of the bus search form that can carry a validation error.
///
/// The wire names double as HTML input names and JSON error keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    From,
    To,
    DepartureDate,
    ReturnDate,
    Passengers,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::From => "from",
            Field::To => "to",
            Field::DepartureDate => "departure_date",
            Field::ReturnDate => "return_date",
            Field::Passengers => "passengers",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
