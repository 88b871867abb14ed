//! Form domain layer
//!
//! Field catalogue, validation rules and the onboarding form records. Nothing
//! here touches the terminal; the UI drives it through [`FieldChange`] and
//! [`OnboardingForm::submit`].

mod field;
mod form_state;
mod rules;

pub use field::{Field, FieldKind, FormField, OTHER};
pub use form_state::{
    FieldChange, OnboardingForm, SubmitError, SubmittedRecord, DEFAULT_EMAIL_DOMAIN,
};
