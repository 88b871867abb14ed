//! Application state and core logic

use crate::config::OnboardingConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::sink::RecordSink;
use crate::state::{AppState, Field, FieldChange, FormRow, Notice, SubmitError, OTHER};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: OnboardingConfig,
    /// Where submitted records go
    sink: Box<dyn RecordSink>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: OnboardingConfig, sink: Box<dyn RecordSink>) -> Self {
        Self {
            state: AppState::default(),
            config,
            sink,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn email_domain(&self) -> &str {
        self.config.email_domain()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.quit = true;
            return Ok(());
        }

        // Notifications are modal
        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('s')
            && (key.modifiers.contains(SUBMIT_MODIFIER)
                || key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return self.submit();
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.state.next_row();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.prev_row();
                return Ok(());
            }
            _ => {}
        }

        match self.state.active() {
            FormRow::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit()?;
                }
            }
            FormRow::Input(field) if field.is_choice() => self.handle_choice_key(field, key),
            FormRow::Input(field) => self.handle_text_key(field, key),
        }

        Ok(())
    }

    /// Left/Right move the highlight; Space/Enter picks it
    fn handle_choice_key(&mut self, field: Field, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.state.prev_choice(),
            KeyCode::Right => self.state.next_choice(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(option) = self
                    .state
                    .active_options()
                    .and_then(|options| options.get(self.state.choice_cursor))
                {
                    self.state.status_message = None;
                    self.state.dispatch(&FieldChange::new(field, *option));
                    if *option == OTHER {
                        if let Some(companion) = field.companion() {
                            self.focus_field(companion);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_text_key(&mut self, field: Field, key: KeyEvent) {
        let Some(text) = self.state.active_text() else {
            return;
        };

        let value = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                text.pushed(c)
            }
            KeyCode::Backspace => text.popped(),
            KeyCode::Enter => {
                self.state.next_row();
                return;
            }
            _ => return,
        };

        self.state.status_message = None;
        self.state.dispatch(&FieldChange::new(field, value));
    }

    /// Move focus to the row holding `field`, if it is on screen
    fn focus_field(&mut self, field: Field) {
        if let Some(index) = self
            .state
            .rows()
            .iter()
            .position(|row| *row == FormRow::Input(field))
        {
            self.state.focus_row(index);
        }
    }

    /// Check the form and, when it passes, emit the record
    pub fn submit(&mut self) -> Result<()> {
        if self.config.enforce_required_markup() {
            if let Some(field) = self.state.form.missing_markup_required().first().copied() {
                tracing::warn!(field = field.name(), "submit blocked: required field empty");
                self.state
                    .push_notice(Notice::error(SubmitError::MissingRequired(field).to_string()));
                self.focus_field(field);
                return Ok(());
            }
        }

        let record = match self.state.form.submit(self.config.email_domain()) {
            Ok(record) => record,
            Err(err) => {
                if let SubmitError::InvalidForm { invalid, missing } = &err {
                    tracing::warn!(?invalid, ?missing, "submit blocked");
                }
                self.state.push_notice(Notice::error(err.to_string()));
                return Ok(());
            }
        };

        let unenforced = self.state.form.unenforced_required();
        if !unenforced.is_empty() {
            tracing::warn!(
                fields = ?unenforced,
                "submitting with required fields left empty"
            );
        }

        self.sink.emit(&record)?;
        tracing::info!(full_email = %record.full_email, "form submitted");

        self.state.push_notice(Notice::success(SUCCESS_MESSAGE));
        self.state.status_message = Some(format!("Submitted {}", record.full_email));
        if self.config.reset_after_submit() {
            self.state.reset_form();
        }
        Ok(())
    }
}
