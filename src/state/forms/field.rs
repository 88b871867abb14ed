//! Form field catalogue and the editable text field value object

use super::form_state::FormValues;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Option value that unlocks a choice group's free-text companion field
pub const OTHER: &str = "Other";

/// Options for the `position` radio group
pub const POSITION_OPTIONS: &[&str] = &[
    "Branch Head / Franchise Partner",
    "Recruiter and Franchise Office",
    "Team Leader at Head Office",
    "BD At Head Office",
    "Admin at Head Office",
    "Intern",
    OTHER,
];

/// Options for the `reportTo` radio group
pub const REPORT_TO_OPTIONS: &[&str] = &[
    "Joyeeta Khaskel",
    "Surbhi Jain",
    "Avadai Marthuvar",
    "Komal Bhanushali",
    "Bankim Doshi",
    "Rashesh Doshi",
    "P. Vayunandan",
    "Vedika Tolani",
    "Suganya R",
    OTHER,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Every input on the onboarding form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    FranchiseName,
    PersonName,
    Position,
    CustomPosition,
    ReportTo,
    CustomReportTo,
    WorkLocation,
    MobileNo,
    WhatsappNo,
    CompanyEmailStart,
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Phone number input; accepts any text, validation is left to the rules
    Tel,
    /// Radio group over a fixed option list
    Choice(&'static [&'static str]),
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Email,
        Field::FranchiseName,
        Field::PersonName,
        Field::Position,
        Field::CustomPosition,
        Field::ReportTo,
        Field::CustomReportTo,
        Field::WorkLocation,
        Field::MobileNo,
        Field::WhatsappNo,
        Field::CompanyEmailStart,
    ];

    /// Key used for this field in records and logs
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::FranchiseName => "franchiseName",
            Field::PersonName => "personName",
            Field::Position => "position",
            Field::CustomPosition => "customPosition",
            Field::ReportTo => "reportTo",
            Field::CustomReportTo => "customReportTo",
            Field::WorkLocation => "workLocation",
            Field::MobileNo => "mobileNo",
            Field::WhatsappNo => "whatsappNo",
            Field::CompanyEmailStart => "companyEmailStart",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::FranchiseName => "Name of Franchise",
            Field::PersonName => "Name of Person",
            Field::Position => "Position",
            Field::CustomPosition => "Position - please specify",
            Field::ReportTo => "Report To",
            Field::CustomReportTo => "Report To - please specify",
            Field::WorkLocation => "Location of Work",
            Field::MobileNo => "Mobile No",
            Field::WhatsappNo => "WhatsApp No",
            Field::CompanyEmailStart => "Company Official Email ID",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::Email => Some("Personal email"),
            Field::FranchiseName => Some("Name as per agreement"),
            Field::PersonName => Some("Enter the name"),
            Field::CompanyEmailStart => Some("Enter your name for the email"),
            _ => None,
        }
    }

    /// Extra guidance printed under the label in the original form
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Field::FranchiseName => Some(
                "Franchisee: name as per agreement (not Talent Corner). TCHR employee: name, then TCHR",
            ),
            _ => None,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Position => FieldKind::Choice(POSITION_OPTIONS),
            Field::ReportTo => FieldKind::Choice(REPORT_TO_OPTIONS),
            Field::MobileNo | Field::WhatsappNo => FieldKind::Tel,
            _ => FieldKind::Text,
        }
    }

    pub fn is_choice(self) -> bool {
        matches!(self.kind(), FieldKind::Choice(_))
    }

    /// Free-text field that becomes active when this choice is "Other"
    pub fn companion(self) -> Option<Field> {
        match self {
            Field::Position => Some(Field::CustomPosition),
            Field::ReportTo => Some(Field::CustomReportTo),
            _ => None,
        }
    }

    /// Choice group this companion field belongs to
    pub fn parent(self) -> Option<Field> {
        match self {
            Field::CustomPosition => Some(Field::Position),
            Field::CustomReportTo => Some(Field::ReportTo),
            _ => None,
        }
    }

    /// Companion fields only exist while their parent is set to "Other"
    pub fn is_visible(self, values: &FormValues) -> bool {
        match self.parent() {
            Some(parent) => values.get(parent) == OTHER,
            None => true,
        }
    }

    /// Whether the form markup flags this field `required` for the given values.
    ///
    /// `reportTo` itself carries no `required` attribute, but its companion does
    /// once "Other" is picked.
    pub fn is_markup_required(self, values: &FormValues) -> bool {
        match self {
            Field::ReportTo => false,
            Field::CustomPosition | Field::CustomReportTo => self.is_visible(values),
            _ => true,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// Text being edited in the focused input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
}

impl FormField {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Value after typing `c`
    pub fn pushed(&self, c: char) -> String {
        let mut value = self.value.clone();
        value.push(c);
        value
    }

    /// Value after a backspace
    pub fn popped(&self) -> String {
        let mut value = self.value.clone();
        value.pop();
        value
    }

    /// Get the display value for rendering, falling back to a placeholder
    pub fn display_value(&self, placeholder: Option<&str>) -> (String, bool) {
        match (self.value.is_empty(), placeholder) {
            (true, Some(p)) => (p.to_string(), true),
            (true, None) => (String::new(), true),
            (false, _) => (self.value.clone(), false),
        }
    }
}
