//! Right panel: captured packet lines.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_STOPPING};
use crate::app::{CaptureLifecycle, Session};

/// Visible slice of a scrollback of `len` lines, `offset` lines up from the
/// tail, in a pane `height` rows tall.
///
/// Returns `(start, end, percent)` where `start..end` is the visible range
/// and `percent` is how far down the viewport is (100 at the tail).
pub fn scroll_window(len: usize, offset: usize, height: usize) -> (usize, usize, u16) {
    let max_offset = len.saturating_sub(height);
    let offset = offset.min(max_offset);
    let end = len - offset;
    let start = end.saturating_sub(height);
    let percent = if max_offset == 0 {
        100
    } else {
        (((max_offset - offset) * 100) / max_offset) as u16
    };
    (start, end, percent)
}

pub fn render_scrollback(frame: &mut Frame, area: Rect, session: &Session) {
    let lifecycle = session.lifecycle();
    let status_color = match lifecycle {
        CaptureLifecycle::Idle => COLOR_DIM,
        CaptureLifecycle::Recording => COLOR_ACTIVE,
        CaptureLifecycle::Stopping => COLOR_STOPPING,
    };

    let mut title = vec![
        Span::styled(" SNIFF - ", Style::default().fg(COLOR_HEADER)),
        Span::styled(
            lifecycle.label(),
            Style::default().fg(status_color).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(capture) = session.active_capture() {
        title.push(Span::styled(
            format!(" | {}", capture.interface),
            Style::default().fg(COLOR_ACCENT),
        ));
        if !capture.filter.is_empty() {
            title.push(Span::styled(
                format!(" | {}", capture.filter),
                Style::default().fg(COLOR_DIM),
            ));
        }
    }
    title.push(Span::raw(" "));

    let lines = session.scrollback();
    let height = area.height.saturating_sub(2) as usize;
    let (start, end, percent) = scroll_window(lines.len(), session.scroll_offset(), height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Line::from(title))
        .title_bottom(
            Line::from(Span::styled(
                format!(" {}% ", percent),
                Style::default().fg(COLOR_DIM),
            ))
            .right_aligned(),
        );

    let content: Vec<Line> = if lines.is_empty() {
        let hint = if lifecycle.is_recording() {
            "Waiting for packets..."
        } else {
            "Select an interface and press Start"
        };
        vec![Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM)))]
    } else {
        lines[start..end]
            .iter()
            .map(|l| Line::from(Span::styled(l.as_str(), Style::default().fg(COLOR_ACCENT))))
            .collect()
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_window_follows_tail() {
        assert_eq!(scroll_window(100, 0, 10), (90, 100, 100));
    }

    #[test]
    fn test_scroll_window_short_content() {
        assert_eq!(scroll_window(3, 0, 10), (0, 3, 100));
        assert_eq!(scroll_window(3, 2, 10), (0, 3, 100));
        assert_eq!(scroll_window(0, 0, 0), (0, 0, 100));
    }

    #[test]
    fn test_scroll_window_clamps_offset() {
        assert_eq!(scroll_window(30, 5, 10), (15, 25, 75));
        assert_eq!(scroll_window(30, 500, 10), (0, 10, 0));
    }
}
