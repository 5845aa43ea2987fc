//! Token table for the latest evaluation

use crate::session::{format_result, Evaluation};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Render the scanned tokens: column, value, operator and rank
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    evaluation: Option<&Evaluation>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match evaluation {
        Some(evaluation) => format!(" Tokens = {} ", format_result(evaluation.result)),
        None => " Tokens ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(super::border_style(is_focused));

    let Some(evaluation) = evaluation else {
        let paragraph = Paragraph::new("(nothing evaluated yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    // Borders plus header row
    let visible_height = area.height.saturating_sub(3).max(1) as usize;
    super::clamp_scroll(scroll_offset, evaluation.tokens.len(), visible_height);

    let rows: Vec<Row> = evaluation
        .tokens
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|token| {
            Row::new(vec![
                Cell::from(token.column.to_string())
                    .style(Style::default().fg(DEFAULT_THEME.comment)),
                Cell::from(format_result(token.value))
                    .style(Style::default().fg(DEFAULT_THEME.number)),
                Cell::from(token.operator.to_string())
                    .style(Style::default().fg(DEFAULT_THEME.operator)),
                Cell::from(token.rank.to_string()).style(Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    let header = Row::new(vec!["col", "value", "op", "rank"]).style(
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    );

    let widths = [
        Constraint::Length(5),
        Constraint::Min(8),
        Constraint::Length(4),
        Constraint::Length(5),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
