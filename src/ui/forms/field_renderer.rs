//! Field rendering utilities for forms

use crate::state::{Field, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one field box (top border + value + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

fn border_style(is_active: bool, has_error: bool) -> Style {
    match (has_error, is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    }
}

/// Title for a field box; required fields carry a `*`
pub fn field_title(field: Field, is_required: bool) -> String {
    let marker = if is_required { "*" } else { "" };
    format!(" {}{} ", field.label(), marker)
}

/// Bordered block for a field, with its inline error (if any) in the bottom border
fn field_block(title: String, error: Option<&str>, is_active: bool) -> Block<'static> {
    let error = error.filter(|e| !e.is_empty());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));

    match error {
        Some(message) => block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        ))),
        None => block,
    }
}

/// Draw a single-line text field
#[allow(clippy::too_many_arguments)]
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    value: &str,
    error: Option<&str>,
    suffix: Option<&str>,
    is_required: bool,
    is_active: bool,
) {
    let (display, is_placeholder) = FormField::with_value(value).display_value(field.placeholder());

    let value_style = if is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = Vec::new();
    if is_active && is_placeholder {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(display, value_style));
    } else {
        spans.push(Span::styled(display, value_style));
        if is_active {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    }
    if let Some(suffix) = suffix {
        spans.push(Span::styled(
            format!(" {suffix}"),
            Style::default().fg(Color::Blue),
        ));
    }

    let block = field_block(field_title(field, is_required), error, is_active);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a radio group as a single row.
///
/// `cursor` is the highlighted option while the row is focused.
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    field: Field,
    options: &[&str],
    selected: &str,
    cursor: Option<usize>,
    is_required: bool,
) {
    let is_active = cursor.is_some();
    let line = match cursor.and_then(|i| options.get(i).map(|o| (i, *o))) {
        Some((index, option)) => {
            let marker = if option == selected { "(•) " } else { "( ) " };
            Line::from(vec![
                Span::styled("◀ ", Style::default().fg(Color::Cyan)),
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(
                    option.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▶", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("  {}/{}", index + 1, options.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        None if selected.is_empty() => Line::from(Span::styled(
            "(none selected)",
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(vec![
            Span::styled("(•) ", Style::default().fg(Color::Green)),
            Span::styled(selected.to_string(), Style::default().fg(Color::Gray)),
        ]),
    };

    let block = field_block(field_title(field, is_required), None, is_active);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
