//! Success dialog component

use super::base::{dismiss_hint, render_dialog, DialogConfig};
use ratatui::{style::Color, Frame};

/// Render a success dialog overlay centered on the screen
pub fn render_success_dialog(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted",
            title_color: Color::Green,
            border_color: Color::Green,
            message,
            hint: Some(dismiss_hint()),
            max_width: 60,
        },
    );
}
