//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::NoticeKind;
use components::{render_error_dialog, render_success_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, status_area) = layout::create_layout(frame.area());

    forms::draw_onboarding_form(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Notifications are drawn last so they overlay the form
    if let Some(notice) = app.state.current_notice() {
        match notice.kind {
            NoticeKind::Error => render_error_dialog(frame, &notice.message),
            NoticeKind::Success => render_success_dialog(frame, &notice.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SUCCESS_MESSAGE;
    use crate::config::OnboardingConfig;
    use crate::sink::LogSink;
    use crate::state::{Field, FieldChange, Notice, OTHER};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(OnboardingConfig::default(), Box::new(LogSink))
    }

    #[test]
    fn test_draw_shows_title_and_first_fields() {
        let screen = render(&app(), 100, 40);
        assert!(screen.contains("Email ID Creation"));
        assert!(screen.contains("Email*"));
        assert!(screen.contains("Personal email"));
        assert!(screen.contains("Report To "));
    }

    #[test]
    fn test_draw_shows_inline_error() {
        let mut app = app();
        app.state
            .dispatch(&FieldChange::new(Field::MobileNo, "123"));
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Number must be exactly 10 digits."));
    }

    #[test]
    fn test_draw_shows_domain_suffix() {
        let screen = render(&app(), 100, 40);
        assert!(screen.contains("@talentcorner.in"));
    }

    #[test]
    fn test_draw_scrolls_to_submit() {
        let mut app = app();
        let last = app.state.rows().len() - 1;
        app.state.focus_row(last);
        let screen = render(&app, 80, 14);
        assert!(screen.contains("Submit"));
        assert!(!screen.contains("Personal email"));
    }

    #[test]
    fn test_draw_companion_only_for_other() {
        let mut app = app();
        assert!(!render(&app, 100, 40).contains("Position - please specify"));
        app.state.dispatch(&FieldChange::new(Field::Position, OTHER));
        assert!(render(&app, 100, 40).contains("Position - please specify"));
    }

    #[test]
    fn test_draw_notice_dialog() {
        let mut app = app();
        app.state
            .push_notice(Notice::error("Please fix all errors before submitting the form."));
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Please fix all errors"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_draw_notice_dialog_on_narrow_terminal() {
        let mut app = app();
        app.state
            .push_notice(Notice::error("Please fix all errors before submitting the form."));
        let screen = render(&app, 50, 40);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Please fix all errors"));
        assert!(screen.contains("form."));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_draw_notice_dialog_on_tiny_terminal() {
        let mut app = app();
        app.state
            .push_notice(Notice::error("Please fix all errors before submitting the form."));
        let screen = render(&app, 20, 4);
        assert!(screen.contains("Error"));

        app.state.dismiss_notice();
        app.state.push_notice(Notice::success(SUCCESS_MESSAGE));
        let screen = render(&app, 20, 4);
        assert!(screen.contains("Submitted"));
    }

    #[test]
    fn test_draw_notice_dialog_survives_any_small_size() {
        let mut app = app();
        app.state.push_notice(Notice::success(SUCCESS_MESSAGE));
        for (width, height) in [(1, 1), (3, 2), (12, 6), (40, 3), (59, 7)] {
            render(&app, width, height);
        }
    }
}
