//! Domain values for trip search.
//!
//! Small, self-contained types shared by the form, the query codec and the
//! web layer: the search mode, calendar-date formatting and the passenger
//! count rules.

mod dates;
mod mode;
mod passengers;

pub use dates::{format_iso_date, format_picker_date, parse_iso_date};
pub use mode::{InvalidSearchMode, SearchMode};
pub use passengers::{
    DEFAULT_PASSENGERS, MAX_PASSENGERS, MIN_PASSENGERS, coerce_passenger_input,
};
