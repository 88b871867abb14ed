//! Layout components (form area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Key hints for the focused row
fn get_hints(app: &App) -> String {
    if app.state.has_notice() {
        return "Enter/Esc: dismiss".to_string();
    }
    let movement = "Tab/↓: next  Shift+Tab/↑: prev";
    let action = if app.state.is_submit_active() {
        "Enter: submit"
    } else if app.state.active_options().is_some() {
        "←/→: browse  Space: select"
    } else {
        "type to edit"
    };
    format!(" {movement}  {action}  {SUBMIT_SHORTCUT}: submit  Ctrl+Q: quit")
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        get_hints(app),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(hint) = app.state.active_field().and_then(|f| f.hint()) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(hint, Style::default().fg(Color::Yellow)));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
