//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    /// Dialog title
    pub title: &'a str,
    /// Title color
    pub title_color: Color,
    /// Border color
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    /// Maximum width of the dialog
    pub max_width: u16,
}

/// "Press Enter or Esc to dismiss"
pub fn dismiss_hint() -> Vec<Span<'static>> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]
}

/// Horizontal padding inside the border, two columns per side
const PADDING: u16 = 4;
const BORDERS: u16 = 2;
const MIN_HEIGHT: u16 = 5;

/// Size a dialog for `content_width` x `body_lines` and center it in `area`.
///
/// The result never extends past `area`; on a terminal smaller than the
/// content the dialog is cut down to the screen.
fn dialog_rect(area: Rect, content_width: u16, body_lines: u16, max_width: u16) -> Rect {
    let width = content_width
        .saturating_add(PADDING + BORDERS)
        .min(max_width)
        .min(area.width);
    let height = body_lines
        .saturating_add(BORDERS)
        .max(MIN_HEIGHT)
        .min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    if area.is_empty() {
        return;
    }

    // Wrap to whatever the screen leaves once border and padding are taken
    let wrap_width = config
        .max_width
        .min(area.width)
        .saturating_sub(PADDING + BORDERS)
        .max(1);
    let message_lines = wrap_text(config.message, wrap_width as usize);

    let hint_width = config
        .hint
        .as_ref()
        .map(|spans| spans.iter().map(|span| text_width(&span.content)).sum::<u16>())
        .unwrap_or(0);
    let content_width = message_lines
        .iter()
        .map(|line| text_width(line))
        .chain([text_width(config.title), hint_width])
        .max()
        .unwrap_or(0);

    let title_style = Style::default()
        .fg(config.title_color)
        .add_modifier(Modifier::BOLD);
    let mut content = vec![
        Line::from(Span::styled(config.title, title_style)),
        Line::from(""),
    ];
    content.extend(message_lines.into_iter().map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint));
    }

    let body_lines = u16::try_from(content.len()).unwrap_or(u16::MAX);
    let dialog_area = dialog_rect(area, content_width, body_lines, config.max_width);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.border_color))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(
        Paragraph::new(content)
            .block(block)
            .style(Style::default().bg(Color::Black)),
        dialog_area,
    );
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_line.chars().count() + word_width + 1 > max_width
                && !current_line.is_empty()
            {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
