//! Onboarding form screen

use super::field_renderer::{draw_choice_field, draw_text_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{visible_window, Field, FieldKind, FormRow};
use crate::ui::components::render_button;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the scrolling list of fields followed by the submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Email ID Creation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = app.state.rows();
    let capacity = (inner.height / FIELD_HEIGHT) as usize;
    let window = visible_window(app.state.active_row, rows.len(), capacity);

    let mut constraints: Vec<Constraint> = window
        .clone()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (chunk, index) in chunks.iter().zip(window) {
        let is_active = index == app.state.active_row;
        match rows[index] {
            FormRow::Input(field) => draw_input(frame, *chunk, app, field, is_active),
            FormRow::Submit => render_button(frame, *chunk, "Submit", is_active, true),
        }
    }
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App, field: Field, is_active: bool) {
    let values = &app.state.form.values;
    let is_required = field.is_markup_required(values);

    match field.kind() {
        FieldKind::Choice(options) => draw_choice_field(
            frame,
            area,
            field,
            options,
            values.get(field),
            is_active.then_some(app.state.choice_cursor),
            is_required,
        ),
        FieldKind::Text | FieldKind::Tel => {
            let suffix = (field == Field::CompanyEmailStart)
                .then(|| format!("@{}", app.email_domain()));
            draw_text_field(
                frame,
                area,
                field,
                values.get(field),
                app.state.form.errors.get(field),
                suffix.as_deref(),
                is_required,
                is_active,
            );
        }
    }
}
