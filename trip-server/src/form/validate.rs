//! Validation rules for the bus search form.
//!
//! Rules are an ordered table of `(field, check)` pairs. For each field the
//! first failing check supplies the message; the return-date rule compares
//! two fields and only runs once the departure date has passed its own
//! checks.

use chrono::NaiveDate;

use crate::domain::{MAX_PASSENGERS, MIN_PASSENGERS};

use super::errors::FieldErrors;
use super::field::Field;
use super::state::SearchFormState;

/// User-facing validation messages.
pub mod messages {
    pub const FROM_REQUIRED: &str = "Please select departure location";
    pub const TO_REQUIRED: &str = "Please select arrival location";
    pub const SAME_LOCATION: &str = "Destination must be different from departure location";
    pub const DEPARTURE_REQUIRED: &str = "Please select departure date";
    pub const DEPARTURE_IN_PAST: &str = "Departure date cannot be in the past";
    pub const RETURN_BEFORE_DEPARTURE: &str =
        "Return date must be after or equal to departure date";
    pub const PASSENGERS_NOT_A_NUMBER: &str = "Please enter a valid number";
    pub const PASSENGERS_TOO_FEW: &str = "At least 1 passenger is required";
    pub const PASSENGERS_TOO_MANY: &str = "Maximum 10 passengers allowed";
}

/// Optional rules that are off unless configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject searches whose origin and destination are the same code.
    pub reject_same_location: bool,

    /// Reject departure dates before today.
    pub reject_past_departure: bool,
}

/// Everything validation depends on besides the form itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub policy: ValidationPolicy,

    /// The current calendar day, for the past-departure rule.
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn new(policy: ValidationPolicy, today: NaiveDate) -> Self {
        Self { policy, today }
    }
}

/// Outcome of validating a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldErrors),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The errors, empty when valid.
    pub fn errors(&self) -> FieldErrors {
        match self {
            ValidationResult::Valid => FieldErrors::new(),
            ValidationResult::Invalid(errors) => errors.clone(),
        }
    }
}

type Check = fn(&SearchFormState, &ValidationContext) -> Option<&'static str>;

struct FieldRule {
    field: Field,
    check: Check,
}

const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::From,
        check: from_required,
    },
    FieldRule {
        field: Field::To,
        check: to_required,
    },
    FieldRule {
        field: Field::To,
        check: to_differs_from_origin,
    },
    FieldRule {
        field: Field::DepartureDate,
        check: departure_required,
    },
    FieldRule {
        field: Field::DepartureDate,
        check: departure_not_in_past,
    },
    FieldRule {
        field: Field::Passengers,
        check: passengers_in_range,
    },
];

/// Validate a candidate form state.
///
/// Pure: the result depends only on `candidate` and `ctx`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use trip_server::form::{Field, SearchFormState, ValidationContext, ValidationPolicy, validate};
///
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let ctx = ValidationContext::new(ValidationPolicy::default(), today);
///
/// let errors = validate(&SearchFormState::default(), &ctx).errors();
/// assert_eq!(errors.get(Field::From), Some("Please select departure location"));
/// ```
pub fn validate(candidate: &SearchFormState, ctx: &ValidationContext) -> ValidationResult {
    let mut errors = FieldErrors::new();

    for rule in FIELD_RULES {
        if errors.contains(rule.field) {
            continue;
        }
        if let Some(message) = (rule.check)(candidate, ctx) {
            errors.insert_first(rule.field, message);
        }
    }

    if !errors.contains(Field::DepartureDate) {
        if let Some(message) = return_not_before_departure(candidate) {
            errors.insert_first(Field::ReturnDate, message);
        }
    }

    if errors.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(errors)
    }
}

fn from_required(state: &SearchFormState, _: &ValidationContext) -> Option<&'static str> {
    state
        .from
        .trim()
        .is_empty()
        .then_some(messages::FROM_REQUIRED)
}

fn to_required(state: &SearchFormState, _: &ValidationContext) -> Option<&'static str> {
    state
        .to
        .trim()
        .is_empty()
        .then_some(messages::TO_REQUIRED)
}

fn to_differs_from_origin(
    state: &SearchFormState,
    ctx: &ValidationContext,
) -> Option<&'static str> {
    (ctx.policy.reject_same_location && !state.from.is_empty() && state.from == state.to)
        .then_some(messages::SAME_LOCATION)
}

fn departure_required(state: &SearchFormState, _: &ValidationContext) -> Option<&'static str> {
    state
        .departure_date
        .is_none()
        .then_some(messages::DEPARTURE_REQUIRED)
}

fn departure_not_in_past(
    state: &SearchFormState,
    ctx: &ValidationContext,
) -> Option<&'static str> {
    if !ctx.policy.reject_past_departure {
        return None;
    }
    state
        .departure_date
        .is_some_and(|dep| dep < ctx.today)
        .then_some(messages::DEPARTURE_IN_PAST)
}

fn passengers_in_range(state: &SearchFormState, _: &ValidationContext) -> Option<&'static str> {
    match state.passengers {
        None => Some(messages::PASSENGERS_NOT_A_NUMBER),
        Some(n) if n < MIN_PASSENGERS => Some(messages::PASSENGERS_TOO_FEW),
        Some(n) if n > MAX_PASSENGERS => Some(messages::PASSENGERS_TOO_MANY),
        Some(_) => None,
    }
}

fn return_not_before_departure(state: &SearchFormState) -> Option<&'static str> {
    match (state.departure_date, state.return_date) {
        (Some(dep), Some(ret)) if ret < dep => Some(messages::RETURN_BEFORE_DEPARTURE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ctx() -> ValidationContext {
        ValidationContext::new(ValidationPolicy::default(), date(2025, 6, 1))
    }

    fn strict_ctx() -> ValidationContext {
        ValidationContext::new(
            ValidationPolicy {
                reject_same_location: true,
                reject_past_departure: true,
            },
            date(2025, 6, 1),
        )
    }

    fn valid_state() -> SearchFormState {
        SearchFormState {
            from: "HCM".into(),
            to: "HAN".into(),
            departure_date: Some(date(2025, 6, 15)),
            passengers: Some(2),
            ..SearchFormState::default()
        }
    }

    #[test]
    fn valid_one_way() {
        assert_eq!(validate(&valid_state(), &ctx()), ValidationResult::Valid);
    }

    #[test]
    fn valid_round_trip_same_day() {
        let state = SearchFormState {
            is_round_trip: true,
            return_date: Some(date(2025, 6, 15)),
            ..valid_state()
        };
        assert!(validate(&state, &ctx()).is_valid());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&SearchFormState::default(), &ctx()).errors();

        assert_eq!(errors.get(Field::From), Some(messages::FROM_REQUIRED));
        assert_eq!(errors.get(Field::To), Some(messages::TO_REQUIRED));
        assert_eq!(
            errors.get(Field::DepartureDate),
            Some(messages::DEPARTURE_REQUIRED)
        );
        assert_eq!(errors.get(Field::ReturnDate), None);
        assert_eq!(errors.get(Field::Passengers), None);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn whitespace_location_is_missing() {
        let state = SearchFormState {
            from: "  ".into(),
            ..valid_state()
        };
        let errors = validate(&state, &ctx()).errors();
        assert_eq!(errors.get(Field::From), Some(messages::FROM_REQUIRED));
    }

    #[test]
    fn return_before_departure() {
        let state = SearchFormState {
            is_round_trip: true,
            return_date: Some(date(2025, 6, 14)),
            ..valid_state()
        };
        let errors = validate(&state, &ctx()).errors();
        assert_eq!(
            errors.get(Field::ReturnDate),
            Some(messages::RETURN_BEFORE_DEPARTURE)
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn return_rule_waits_for_departure() {
        let state = SearchFormState {
            departure_date: None,
            is_round_trip: true,
            return_date: Some(date(2025, 6, 14)),
            ..valid_state()
        };
        let errors = validate(&state, &ctx()).errors();
        assert!(errors.contains(Field::DepartureDate));
        assert!(!errors.contains(Field::ReturnDate));
    }

    #[test]
    fn passenger_bounds() {
        let with = |n: Option<i64>| SearchFormState {
            passengers: n,
            ..valid_state()
        };

        assert!(validate(&with(Some(1)), &ctx()).is_valid());
        assert!(validate(&with(Some(10)), &ctx()).is_valid());

        let errors = validate(&with(Some(0)), &ctx()).errors();
        assert_eq!(errors.get(Field::Passengers), Some(messages::PASSENGERS_TOO_FEW));

        let errors = validate(&with(Some(-3)), &ctx()).errors();
        assert_eq!(errors.get(Field::Passengers), Some(messages::PASSENGERS_TOO_FEW));

        let errors = validate(&with(Some(11)), &ctx()).errors();
        assert_eq!(errors.get(Field::Passengers), Some(messages::PASSENGERS_TOO_MANY));

        let errors = validate(&with(None), &ctx()).errors();
        assert_eq!(
            errors.get(Field::Passengers),
            Some(messages::PASSENGERS_NOT_A_NUMBER)
        );
    }

    #[test]
    fn same_location_allowed_by_default() {
        let state = SearchFormState {
            to: "HCM".into(),
            ..valid_state()
        };
        assert!(validate(&state, &ctx()).is_valid());
    }

    #[test]
    fn same_location_rejected_when_configured() {
        let state = SearchFormState {
            to: "HCM".into(),
            ..valid_state()
        };
        let errors = validate(&state, &strict_ctx()).errors();
        assert_eq!(errors.get(Field::To), Some(messages::SAME_LOCATION));
    }

    #[test]
    fn missing_destination_beats_same_location() {
        let state = SearchFormState {
            from: String::new(),
            to: String::new(),
            ..valid_state()
        };
        let errors = validate(&state, &strict_ctx()).errors();
        assert_eq!(errors.get(Field::To), Some(messages::TO_REQUIRED));
    }

    #[test]
    fn past_departure_allowed_by_default() {
        let state = SearchFormState {
            departure_date: Some(date(2024, 1, 1)),
            ..valid_state()
        };
        assert!(validate(&state, &ctx()).is_valid());
    }

    #[test]
    fn past_departure_rejected_when_configured() {
        let state = SearchFormState {
            departure_date: Some(date(2025, 5, 31)),
            is_round_trip: true,
            return_date: Some(date(2025, 5, 1)),
            ..valid_state()
        };
        let errors = validate(&state, &strict_ctx()).errors();
        assert_eq!(
            errors.get(Field::DepartureDate),
            Some(messages::DEPARTURE_IN_PAST)
        );
        // Departure failed its own checks, so the cross-field rule is skipped.
        assert!(!errors.contains(Field::ReturnDate));

        let today = SearchFormState {
            departure_date: Some(date(2025, 6, 1)),
            ..valid_state()
        };
        assert!(validate(&today, &strict_ctx()).is_valid());
    }
}
