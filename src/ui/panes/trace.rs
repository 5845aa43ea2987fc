//! Reduction trace pane
//!
//! One row per snapshot. The token that received a fold is highlighted so the
//! left-to-right order inside each rank is visible.

use crate::session::{format_result, Evaluation};
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn snapshot_line(snapshot: &Snapshot) -> Line<'static> {
    let label = match snapshot.rank {
        Some(rank) => format!("rank {} ", rank),
        None => "start  ".to_string(),
    };

    let mut spans = vec![Span::styled(
        label,
        Style::default().fg(DEFAULT_THEME.comment),
    )];

    for (i, token) in snapshot.tokens.iter().enumerate() {
        let value_style = if snapshot.folded_at == Some(i) {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.number)
        };
        spans.push(Span::styled(format_result(token.value), value_style));
        spans.push(Span::styled(
            format!(" {} ", token.operator),
            Style::default().fg(DEFAULT_THEME.operator),
        ));
    }

    Line::from(spans)
}

pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    evaluation: Option<&Evaluation>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Reduction ")
        .borders(Borders::ALL)
        .border_style(super::border_style(is_focused));

    let trace = evaluation.map(|e| e.trace.as_slice()).unwrap_or_default();
    if trace.is_empty() {
        let paragraph = Paragraph::new("(no reduction recorded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    super::clamp_scroll(scroll_offset, trace.len(), visible_height);

    let items: Vec<ListItem> = trace
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|snapshot| ListItem::new(snapshot_line(snapshot)))
        .collect();

    let mut list = List::new(items).block(block);
    if trace.len() == 1 {
        list = list.style(Style::default().fg(DEFAULT_THEME.result));
    }
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::{Operator, Token};

    #[test]
    fn test_snapshot_line_text() {
        let snapshot = Snapshot {
            tokens: vec![
                Token::new(2.0, Operator::Add, 2),
                Token::new(12.0, Operator::End, 6),
            ],
            rank: Some(2),
            folded_at: Some(1),
        };
        let line = snapshot_line(&snapshot);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "rank 2 2 + 12 = ");
        assert!(line.spans[3].style.add_modifier.contains(Modifier::BOLD));
    }
}
