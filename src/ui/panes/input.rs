//! Input line rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the line being edited and place the terminal cursor after it
pub fn render_input_pane(frame: &mut Frame, area: Rect, prompt: &str, input: &str, limit: usize) {
    let title = format!(" Input {}/{} ", input.chars().count(), limit);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.primary));

    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(input, Style::default().fg(DEFAULT_THEME.fg)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);

    let text_width = (prompt.chars().count() + input.chars().count()) as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    let x = (area.x + 1 + text_width).min(max_x);
    frame.set_cursor_position((x, area.y + 1));
}
