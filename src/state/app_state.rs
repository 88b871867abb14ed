//! Application state definitions

use super::forms::{Field, FieldChange, FieldKind, FormField, OnboardingForm};
use std::collections::VecDeque;
use std::ops::Range;

/// One focusable row of the form screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Input(Field),
    Submit,
}

/// Kind of modal notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// Modal notification waiting to be acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: OnboardingForm,
    /// Index into [`AppState::rows`]
    pub active_row: usize,
    /// Highlighted option while a choice row is focused
    pub choice_cursor: usize,
    /// Queue of notifications; the front one is on screen
    notices: VecDeque<Notice>,
    pub status_message: Option<String>,
}

impl AppState {
    /// Rows currently on screen: every visible field, then the submit button
    pub fn rows(&self) -> Vec<FormRow> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_visible(&self.form.values))
            .map(FormRow::Input)
            .chain(std::iter::once(FormRow::Submit))
            .collect()
    }

    pub fn active(&self) -> FormRow {
        let rows = self.rows();
        rows.get(self.active_row)
            .copied()
            .unwrap_or(FormRow::Submit)
    }

    pub fn active_field(&self) -> Option<Field> {
        match self.active() {
            FormRow::Input(field) => Some(field),
            FormRow::Submit => None,
        }
    }

    pub fn is_submit_active(&self) -> bool {
        self.active() == FormRow::Submit
    }

    pub fn next_row(&mut self) {
        let count = self.rows().len();
        self.focus_row((self.active_row + 1) % count);
    }

    pub fn prev_row(&mut self) {
        let count = self.rows().len();
        if self.active_row == 0 {
            self.focus_row(count - 1);
        } else {
            self.focus_row(self.active_row - 1);
        }
    }

    /// Focus a row and sync the choice highlight with its stored value
    pub fn focus_row(&mut self, index: usize) {
        let count = self.rows().len();
        self.active_row = index.min(count - 1);
        self.choice_cursor = match self.active_field().map(|f| (f, f.kind())) {
            Some((field, FieldKind::Choice(options))) => {
                let current = self.form.values.get(field);
                options.iter().position(|o| *o == current).unwrap_or(0)
            }
            _ => 0,
        };
    }

    /// Options of the focused choice row
    pub fn active_options(&self) -> Option<&'static [&'static str]> {
        match self.active_field()?.kind() {
            FieldKind::Choice(options) => Some(options),
            _ => None,
        }
    }

    pub fn next_choice(&mut self) {
        if let Some(options) = self.active_options() {
            self.choice_cursor = (self.choice_cursor + 1) % options.len();
        }
    }

    pub fn prev_choice(&mut self) {
        if let Some(options) = self.active_options() {
            self.choice_cursor = if self.choice_cursor == 0 {
                options.len() - 1
            } else {
                self.choice_cursor - 1
            };
        }
    }

    /// Text editor over the focused field's current value
    pub fn active_text(&self) -> Option<FormField> {
        let field = self.active_field()?;
        if field.is_choice() {
            return None;
        }
        Some(FormField::with_value(self.form.values.get(field)))
    }

    /// Run a change through the form reducer
    pub fn dispatch(&mut self, change: &FieldChange) {
        self.form = self.form.apply(change);
    }

    /// Discard all input and return focus to the first row
    pub fn reset_form(&mut self) {
        self.form = OnboardingForm::new();
        self.focus_row(0);
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn has_notice(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn dismiss_notice(&mut self) {
        self.notices.pop_front();
    }
}

/// Range of rows to draw so that `active` stays visible when only
/// `capacity` rows fit
pub fn visible_window(active: usize, total: usize, capacity: usize) -> Range<usize> {
    let capacity = capacity.max(1);
    if total <= capacity {
        return 0..total;
    }
    let start = active
        .saturating_sub(capacity - 1)
        .min(total - capacity);
    start..start + capacity
}
