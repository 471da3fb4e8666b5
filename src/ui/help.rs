//! Key help: one line when collapsed, columns when expanded.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::input::{full_help, short_help, HelpEntry};

/// Rows needed by the help block.
pub fn help_height(expanded: bool) -> u16 {
    if expanded {
        full_help().iter().map(Vec::len).max().unwrap_or(1) as u16
    } else {
        1
    }
}

pub fn render_help(frame: &mut Frame, area: Rect, expanded: bool) {
    if !expanded {
        frame.render_widget(Paragraph::new(help_line(&short_help())), area);
        return;
    }

    let columns = full_help();
    let constraints = vec![Constraint::Ratio(1, columns.len() as u32); columns.len()];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (column, chunk) in columns.iter().zip(chunks.iter()) {
        let lines: Vec<Line> = column.iter().map(|entry| help_line(&[*entry])).collect();
        frame.render_widget(Paragraph::new(lines), *chunk);
    }
}

fn help_line(entries: &[HelpEntry]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(entry.keys, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(
            format!(" {}", entry.description),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Line::from(spans)
}
