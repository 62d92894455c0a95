//! Search form state machine.
//!
//! ```text
//! Editing --submit--> Submitting --valid, navigated--> Navigated
//!    ^                    |
//!    +---invalid/failed---+
//! ```

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::query::{EncodedSearchParams, encode};

use super::errors::FieldErrors;
use super::field::Field;
use super::navigate::Navigator;
use super::state::{FieldEdit, SearchFormState};
use super::validate::{ValidationContext, ValidationResult, validate};

/// Notice shown when a valid search could not be handed to navigation.
pub const SUBMIT_FAILED_NOTICE: &str = "An error occurred. Please try again.";

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Accepting edits (initial)
    #[default]
    Editing,
    /// Validating and navigating; only observable inside `submit`
    Submitting,
    /// Navigation happened; the form is done
    Navigated,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Valid; navigation was triggered with these parameters
    Navigated(EncodedSearchParams),
    /// Invalid; the errors are also kept on the form
    Rejected(FieldErrors),
    /// Valid, but navigation failed. State is unchanged and the user may retry.
    Failed { notice: &'static str },
    /// The form was not in [`FormPhase::Editing`]
    Busy,
}

/// The bus search form.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    state: SearchFormState,
    phase: FormPhase,
    errors: FieldErrors,
}

impl SearchForm {
    /// A fresh form with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchFormState {
        &self.state
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Errors from the last rejected submit, minus fields edited since.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_round_trip(&self) -> bool {
        self.state.is_round_trip
    }

    /// Apply a single-field edit.
    ///
    /// Returns `false` if the edit was refused: the form is not editing, or
    /// a return date was picked while the round trip toggle is off.
    pub fn apply(&mut self, edit: FieldEdit) -> bool {
        if self.phase != FormPhase::Editing {
            debug!(field = %edit.field(), phase = ?self.phase, "edit ignored");
            return false;
        }

        let field = edit.field();
        match edit {
            FieldEdit::From(code) => self.state.from = code,
            FieldEdit::To(code) => self.state.to = code,
            FieldEdit::DepartureDate(date) => self.state.departure_date = date,
            FieldEdit::ReturnDate(date) => {
                if date.is_some() && !self.state.is_round_trip {
                    debug!("return date picked while one-way, ignored");
                    return false;
                }
                self.state.return_date = date;
            }
            FieldEdit::Passengers(count) => self.state.passengers = count,
        }
        self.errors.remove(field);
        true
    }

    /// Turn the round trip toggle on or off.
    ///
    /// Turning it off clears the return date, whatever it was.
    pub fn set_round_trip(&mut self, on: bool) {
        if self.phase != FormPhase::Editing {
            return;
        }
        self.state.is_round_trip = on;
        if !on {
            self.state.return_date = None;
            self.errors.remove(Field::ReturnDate);
        }
    }

    /// Flip the round trip toggle.
    pub fn toggle_round_trip(&mut self) {
        self.set_round_trip(!self.state.is_round_trip);
    }

    /// Earliest departure date the picker offers.
    pub fn min_departure_date(&self, today: NaiveDate) -> NaiveDate {
        today
    }

    /// Earliest return date the picker offers.
    ///
    /// Follows the departure date once one is picked. An already-picked
    /// return date that falls below a raised minimum is left in place; the
    /// validator reports it on submit.
    pub fn min_return_date(&self, today: NaiveDate) -> NaiveDate {
        self.state.departure_date.unwrap_or(today)
    }

    /// Submit the form.
    ///
    /// Validates the whole state; on success hands the encoded parameters to
    /// `navigator`. A navigation failure is logged and reported as a generic
    /// notice, leaving the state as it was.
    pub fn submit<N: Navigator>(
        &mut self,
        ctx: &ValidationContext,
        navigator: &mut N,
    ) -> SubmitOutcome {
        if self.phase != FormPhase::Editing {
            debug!(phase = ?self.phase, "submit ignored");
            return SubmitOutcome::Busy;
        }
        self.phase = FormPhase::Submitting;

        if let ValidationResult::Invalid(errors) = validate(&self.state, ctx) {
            debug!(error_count = errors.len(), "search rejected");
            self.errors = errors.clone();
            self.phase = FormPhase::Editing;
            return SubmitOutcome::Rejected(errors);
        }
        self.errors.clear();

        let params = encode(&self.state);
        match navigator.navigate(&params) {
            Ok(()) => {
                info!(from = %params.from, to = %params.to, dep = %params.dep, "search submitted");
                self.phase = FormPhase::Navigated;
                SubmitOutcome::Navigated(params)
            }
            Err(e) => {
                warn!(error = %e, "navigation failed");
                self.phase = FormPhase::Editing;
                SubmitOutcome::Failed {
                    notice: SUBMIT_FAILED_NOTICE,
                }
            }
        }
    }
}
