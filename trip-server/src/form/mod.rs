//! Bus search form.
//!
//! The form is modelled as one explicit state value plus pure transitions,
//! so the whole edit → validate → navigate flow can be exercised without a
//! browser. Validation is a declarative rule table evaluated by a pure
//! function.

mod errors;
mod field;
mod machine;
mod navigate;
mod state;
mod validate;

pub use errors::FieldErrors;
pub use field::Field;
pub use machine::{FormPhase, SUBMIT_FAILED_NOTICE, SearchForm, SubmitOutcome};
pub use navigate::{NavigationError, Navigator, RedirectNavigator};
pub use state::{FieldEdit, SearchFormState};
pub use validate::{ValidationContext, ValidationPolicy, ValidationResult, messages, validate};
