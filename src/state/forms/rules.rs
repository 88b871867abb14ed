//! Field validators, sanitizers and the rule table binding them to fields

use super::field::Field;
use lazy_static::lazy_static;
use regex::Regex;

pub const EMAIL_MESSAGE: &str =
    "Email must contain \"@\" and no special characters apart from \"@\" are allowed.";
pub const COMPANY_EMAIL_START_MESSAGE: &str =
    "Only lowercase letters, numbers, and underscores are allowed.";
pub const NAME_MESSAGE: &str = "Name should not contain numbers or special characters.";
pub const MOBILE_NUMBER_MESSAGE: &str = "Number must be exactly 10 digits.";

lazy_static! {
    // Local part also admits '.' and '_', whatever the message says.
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._]+@[a-zA-Z0-9]+\.[a-zA-Z]{2,}$").unwrap();
    static ref COMPANY_EMAIL_START_RE: Regex = Regex::new(r"^[a-z0-9_]+$").unwrap();
    // Whitespace is the ECMAScript `\s` set, not Unicode White_Space: U+FEFF
    // counts, U+0085 does not.
    static ref NAME_RE: Regex = Regex::new(
        r"^[a-zA-Z\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+$"
    )
    .unwrap();
    static ref MOBILE_NUMBER_RE: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
    static ref COMPANY_EMAIL_START_STRIP_RE: Regex = Regex::new(r"[^a-z0-9_]").unwrap();
}

pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn validate_company_email_start(value: &str) -> bool {
    COMPANY_EMAIL_START_RE.is_match(value)
}

/// Letters and whitespace only
pub fn validate_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

/// Exactly ten ASCII digits
pub fn validate_mobile_number(value: &str) -> bool {
    MOBILE_NUMBER_RE.is_match(value)
}

/// Lowercase, then drop anything outside `[a-z0-9_]`
pub fn sanitize_company_email_start(value: &str) -> String {
    COMPANY_EMAIL_START_STRIP_RE
        .replace_all(&value.to_lowercase(), "")
        .into_owned()
}

/// Validation and storage rule for one field
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub validator: fn(&str) -> bool,
    pub message: &'static str,
    pub sanitizer: Option<fn(&str) -> String>,
}

impl FieldRule {
    /// Error message for `raw`, or `None` when it passes
    pub fn check(&self, raw: &str) -> Option<&'static str> {
        if (self.validator)(raw) {
            None
        } else {
            Some(self.message)
        }
    }

    /// Value to store for `raw`
    pub fn store(&self, raw: &str) -> String {
        match self.sanitizer {
            Some(sanitize) => sanitize(raw),
            None => raw.to_string(),
        }
    }
}

pub const RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Email,
        validator: validate_email,
        message: EMAIL_MESSAGE,
        sanitizer: None,
    },
    FieldRule {
        field: Field::CompanyEmailStart,
        validator: validate_company_email_start,
        message: COMPANY_EMAIL_START_MESSAGE,
        sanitizer: Some(sanitize_company_email_start),
    },
    FieldRule {
        field: Field::FranchiseName,
        validator: validate_name,
        message: NAME_MESSAGE,
        sanitizer: None,
    },
    FieldRule {
        field: Field::PersonName,
        validator: validate_name,
        message: NAME_MESSAGE,
        sanitizer: None,
    },
    FieldRule {
        field: Field::MobileNo,
        validator: validate_mobile_number,
        message: MOBILE_NUMBER_MESSAGE,
        sanitizer: None,
    },
    FieldRule {
        field: Field::WhatsappNo,
        validator: validate_mobile_number,
        message: MOBILE_NUMBER_MESSAGE,
        sanitizer: None,
    },
];

pub fn rule_for(field: Field) -> Option<&'static FieldRule> {
    RULES.iter().find(|rule| rule.field == field)
}
