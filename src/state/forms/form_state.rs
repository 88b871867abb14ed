//! Onboarding form records, the change reducer and the submit check

use super::field::Field;
use super::rules::rule_for;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain appended to `companyEmailStart` to build the official address
pub const DEFAULT_EMAIL_DOMAIN: &str = "talentcorner.in";

/// Fields the submit handler refuses to send empty
pub const SUBMIT_REQUIRED: [Field; 6] = [
    Field::Email,
    Field::FranchiseName,
    Field::PersonName,
    Field::MobileNo,
    Field::WhatsappNo,
    Field::CompanyEmailStart,
];

/// Current value of every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub email: String,
    pub franchise_name: String,
    pub person_name: String,
    pub position: String,
    pub custom_position: String,
    pub report_to: String,
    pub custom_report_to: String,
    pub work_location: String,
    pub mobile_no: String,
    pub whatsapp_no: String,
    pub company_email_start: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::FranchiseName => &self.franchise_name,
            Field::PersonName => &self.person_name,
            Field::Position => &self.position,
            Field::CustomPosition => &self.custom_position,
            Field::ReportTo => &self.report_to,
            Field::CustomReportTo => &self.custom_report_to,
            Field::WorkLocation => &self.work_location,
            Field::MobileNo => &self.mobile_no,
            Field::WhatsappNo => &self.whatsapp_no,
            Field::CompanyEmailStart => &self.company_email_start,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::FranchiseName => &mut self.franchise_name,
            Field::PersonName => &mut self.person_name,
            Field::Position => &mut self.position,
            Field::CustomPosition => &mut self.custom_position,
            Field::ReportTo => &mut self.report_to,
            Field::CustomReportTo => &mut self.custom_report_to,
            Field::WorkLocation => &mut self.work_location,
            Field::MobileNo => &mut self.mobile_no,
            Field::WhatsappNo => &mut self.whatsapp_no,
            Field::CompanyEmailStart => &mut self.company_email_start,
        };
        *slot = value;
    }
}

/// Inline error per validated field; an empty string means no error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub email: String,
    pub company_email_start: String,
    pub franchise_name: String,
    pub person_name: String,
    pub mobile_no: String,
    pub whatsapp_no: String,
}

impl FieldErrors {
    /// Error for `field`; `None` when the field has no error slot
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => Some(&self.email),
            Field::CompanyEmailStart => Some(&self.company_email_start),
            Field::FranchiseName => Some(&self.franchise_name),
            Field::PersonName => Some(&self.person_name),
            Field::MobileNo => Some(&self.mobile_no),
            Field::WhatsappNo => Some(&self.whatsapp_no),
            _ => None,
        }
    }

    /// Set the error for `field`. Fields without a slot are ignored.
    pub fn set(&mut self, field: Field, message: &str) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::CompanyEmailStart => &mut self.company_email_start,
            Field::FranchiseName => &mut self.franchise_name,
            Field::PersonName => &mut self.person_name,
            Field::MobileNo => &mut self.mobile_no,
            Field::WhatsappNo => &mut self.whatsapp_no,
            _ => return,
        };
        *slot = message.to_string();
    }

    /// Fields currently carrying a message, in form order
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_some_and(|m| !m.is_empty()))
            .collect()
    }
}

/// A single input event: the raw value now held by `field`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: Field,
    pub value: String,
}

impl FieldChange {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Record emitted on a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRecord {
    #[serde(flatten)]
    pub values: FormValues,
    pub full_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// A field has a format error, or a submit-required field is empty
    #[error("Please fix all errors before submitting the form.")]
    InvalidForm {
        invalid: Vec<Field>,
        missing: Vec<Field>,
    },
    /// A field marked `required` in the form is empty
    #[error("Please fill out this field: {}", .0.label())]
    MissingRequired(Field),
}

/// The onboarding form: values plus inline errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    pub values: FormValues,
    pub errors: FieldErrors,
}

/// Apply one change: validate the raw value, then store it (sanitized when
/// the field's rule says so). Other fields are left as they were.
pub fn reduce(form: &OnboardingForm, change: &FieldChange) -> OnboardingForm {
    let mut next = form.clone();
    let stored = match rule_for(change.field) {
        Some(rule) => {
            next.errors
                .set(change.field, rule.check(&change.value).unwrap_or_default());
            rule.store(&change.value)
        }
        None => change.value.clone(),
    };
    tracing::debug!(
        field = change.field.name(),
        valid = next.errors.get(change.field).map_or(true, str::is_empty),
        "field changed"
    );
    next.values.set(change.field, stored);
    next
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, change: &FieldChange) -> Self {
        reduce(self, change)
    }

    pub fn full_email(&self, domain: &str) -> String {
        format!("{}@{}", self.values.company_email_start, domain)
    }

    /// Submit-required fields that are still empty
    pub fn missing_fields(&self) -> Vec<Field> {
        SUBMIT_REQUIRED
            .into_iter()
            .filter(|f| self.values.get(*f).is_empty())
            .collect()
    }

    /// Empty fields the form markup marks required, in form order
    pub fn missing_markup_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_markup_required(&self.values) && self.values.get(*f).is_empty())
            .collect()
    }

    /// Markup-required fields that are empty but which `submit` lets through
    pub fn unenforced_required(&self) -> Vec<Field> {
        self.missing_markup_required()
            .into_iter()
            .filter(|f| !SUBMIT_REQUIRED.contains(f))
            .collect()
    }

    /// Check the form and assemble the record to emit
    pub fn submit(&self, domain: &str) -> Result<SubmittedRecord, SubmitError> {
        let invalid = self.errors.invalid_fields();
        let missing = self.missing_fields();
        if !invalid.is_empty() || !missing.is_empty() {
            return Err(SubmitError::InvalidForm { invalid, missing });
        }

        Ok(SubmittedRecord {
            values: self.values.clone(),
            full_email: self.full_email(domain),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::OTHER;
    use crate::state::forms::rules::{
        COMPANY_EMAIL_START_MESSAGE, EMAIL_MESSAGE, MOBILE_NUMBER_MESSAGE, NAME_MESSAGE,
    };
    use pretty_assertions::assert_eq;

    fn filled_form() -> OnboardingForm {
        [
            (Field::Email, "jane.doe@gmail.com"),
            (Field::FranchiseName, "Acme Staffing"),
            (Field::PersonName, "Jane Doe"),
            (Field::Position, "Intern"),
            (Field::WorkLocation, "Mumbai"),
            (Field::MobileNo, "9876543210"),
            (Field::WhatsappNo, "9123456780"),
            (Field::CompanyEmailStart, "jane_doe"),
        ]
        .into_iter()
        .fold(OnboardingForm::new(), |form, (field, value)| {
            form.apply(&FieldChange::new(field, value))
        })
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = OnboardingForm::new();
        assert_eq!(form.values, FormValues::default());
        assert!(form.errors.invalid_fields().is_empty());
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let form = OnboardingForm::new();
        let next = reduce(&form, &FieldChange::new(Field::Email, "abc"));
        assert_eq!(form, OnboardingForm::new());
        assert_eq!(next.values.email, "abc");
        assert_eq!(next.errors.email, EMAIL_MESSAGE);
    }

    #[test]
    fn test_reduce_clears_error_once_valid() {
        let form = OnboardingForm::new()
            .apply(&FieldChange::new(Field::MobileNo, "98765"))
            .apply(&FieldChange::new(Field::MobileNo, "9876543210"));
        assert_eq!(form.errors.mobile_no, "");
        assert_eq!(form.values.mobile_no, "9876543210");
    }

    #[test]
    fn test_reduce_leaves_other_fields_alone() {
        let form = filled_form();
        let next = form.apply(&FieldChange::new(Field::PersonName, "Jane3"));

        assert_eq!(next.errors.person_name, NAME_MESSAGE);
        let mut expected = form.values.clone();
        expected.person_name = "Jane3".to_string();
        assert_eq!(next.values, expected);
        assert_eq!(next.errors.invalid_fields(), vec![Field::PersonName]);
    }

    #[test]
    fn test_company_email_start_stored_sanitized_but_raw_is_flagged() {
        let form = OnboardingForm::new().apply(&FieldChange::new(
            Field::CompanyEmailStart,
            "John.Doe!",
        ));
        assert_eq!(form.values.company_email_start, "johndoe");
        assert_eq!(form.errors.company_email_start, COMPANY_EMAIL_START_MESSAGE);
    }

    #[test]
    fn test_unvalidated_fields_stored_verbatim() {
        let form = OnboardingForm::new()
            .apply(&FieldChange::new(Field::WorkLocation, "  Pune #2 "))
            .apply(&FieldChange::new(Field::Position, OTHER))
            .apply(&FieldChange::new(Field::CustomPosition, "Trainer"));
        assert_eq!(form.values.work_location, "  Pune #2 ");
        assert_eq!(form.values.position, OTHER);
        assert_eq!(form.values.custom_position, "Trainer");
        assert!(form.errors.invalid_fields().is_empty());
    }

    #[test]
    fn test_whatsapp_and_mobile_have_independent_errors() {
        let form = OnboardingForm::new()
            .apply(&FieldChange::new(Field::WhatsappNo, "12"))
            .apply(&FieldChange::new(Field::MobileNo, "9876543210"));
        assert_eq!(form.errors.whatsapp_no, MOBILE_NUMBER_MESSAGE);
        assert_eq!(form.errors.mobile_no, "");
    }

    #[test]
    fn test_submit_succeeds_with_full_email() {
        let record = filled_form().submit(DEFAULT_EMAIL_DOMAIN).unwrap();
        assert_eq!(record.full_email, "jane_doe@talentcorner.in");
        assert_eq!(record.values, filled_form().values);
    }

    #[test]
    fn test_submit_blocked_by_empty_required_without_errors() {
        let mut form = filled_form();
        form.values.email.clear();

        let err = form.submit(DEFAULT_EMAIL_DOMAIN).unwrap_err();
        assert_eq!(
            err,
            SubmitError::InvalidForm {
                invalid: vec![],
                missing: vec![Field::Email],
            }
        );
        assert_eq!(
            err.to_string(),
            "Please fix all errors before submitting the form."
        );
    }

    #[test]
    fn test_submit_blocked_by_format_error() {
        let form = filled_form().apply(&FieldChange::new(Field::MobileNo, "12345"));
        let err = form.submit(DEFAULT_EMAIL_DOMAIN).unwrap_err();
        assert_eq!(
            err,
            SubmitError::InvalidForm {
                invalid: vec![Field::MobileNo],
                missing: vec![],
            }
        );
    }

    #[test]
    fn test_submit_blocked_on_new_form() {
        let err = OnboardingForm::new().submit(DEFAULT_EMAIL_DOMAIN).unwrap_err();
        assert_eq!(
            err,
            SubmitError::InvalidForm {
                invalid: vec![],
                missing: SUBMIT_REQUIRED.to_vec(),
            }
        );
    }

    #[test]
    fn test_submit_ignores_position_report_to_and_location() {
        let form = filled_form()
            .apply(&FieldChange::new(Field::Position, ""))
            .apply(&FieldChange::new(Field::WorkLocation, ""));
        assert!(form.submit(DEFAULT_EMAIL_DOMAIN).is_ok());
        assert_eq!(
            form.unenforced_required(),
            vec![Field::Position, Field::WorkLocation]
        );
    }

    #[test]
    fn test_other_without_custom_value_is_flagged_not_blocked() {
        let form = filled_form()
            .apply(&FieldChange::new(Field::Position, OTHER))
            .apply(&FieldChange::new(Field::ReportTo, OTHER));
        assert!(form.submit(DEFAULT_EMAIL_DOMAIN).is_ok());
        assert_eq!(
            form.missing_markup_required(),
            vec![Field::CustomPosition, Field::CustomReportTo]
        );
    }

    #[test]
    fn test_resubmit_is_deterministic() {
        let form = filled_form();
        let first = form.submit(DEFAULT_EMAIL_DOMAIN).unwrap();
        let second = form.submit(DEFAULT_EMAIL_DOMAIN).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_record_serializes_flat_camel_case() {
        let record = filled_form().submit(DEFAULT_EMAIL_DOMAIN).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["companyEmailStart"], "jane_doe");
        assert_eq!(json["fullEmail"], "jane_doe@talentcorner.in");
        assert_eq!(json["customReportTo"], "");
        assert_eq!(json.as_object().unwrap().len(), 12);
    }

    #[test]
    fn test_missing_required_message_uses_label() {
        let err = SubmitError::MissingRequired(Field::WorkLocation);
        assert_eq!(err.to_string(), "Please fill out this field: Location of Work");
    }

    #[test]
    fn test_custom_domain() {
        let form = filled_form();
        assert_eq!(form.full_email("example.org"), "jane_doe@example.org");
    }
}
