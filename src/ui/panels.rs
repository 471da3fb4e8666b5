//! Left panel: interface list, filter field, buttons, error line and help.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::help::{help_height, render_help};
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_ERROR, COLOR_FOCUS, COLOR_HEADER,
    COLOR_STOPPING,
};
use crate::app::{CaptureLifecycle, FocusZone, Session};
use crate::widgets::FilterInputWidget;

const LOGO: &str = "//SNIFF//";

/// Indent of the address lines under a selected interface.
const ADDRESS_INDENT: &str = "       - ";

pub fn render_left_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                           // Logo
            Constraint::Min(1),                              // Interfaces
            Constraint::Length(3),                           // Filter
            Constraint::Length(1),                           // Buttons
            Constraint::Length(1),                           // Error log
            Constraint::Length(help_height(session.help_expanded())), // Help
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(Span::styled(
        LOGO,
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(logo, chunks[0]);

    render_interfaces(frame, chunks[1], session);

    let focus = session.focus_zone();
    frame.render_widget(
        FilterInputWidget::new(session.filter(), "Filter", focus == FocusZone::Filter),
        chunks[2],
    );

    render_buttons(frame, chunks[3], session);
    render_error_line(frame, chunks[4], session);
    render_help(frame, chunks[5], session.help_expanded());
}

/// Interface rows, with the selected row's addresses listed beneath it.
fn render_interfaces(frame: &mut Frame, area: Rect, session: &Session) {
    let focus = session.focus_zone();
    let mut lines = Vec::new();
    let mut focused_line = None;

    for (i, iface) in session.interfaces().iter().enumerate() {
        let focused = focus == FocusZone::Interface(i);
        let selected = session.selected() == Some(i);
        if focused {
            focused_line = Some(lines.len());
        }

        let cursor = if focused { "> " } else { "  " };
        let mark = if selected { "[x] " } else { "[ ] " };
        let row_style = if focused {
            Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        let mark_style = if selected {
            Style::default().fg(COLOR_ACTIVE)
        } else {
            row_style
        };

        lines.push(Line::from(vec![
            Span::styled(cursor, row_style),
            Span::styled(mark, mark_style),
            Span::styled(iface.label(), row_style),
        ]));

        if selected {
            for addr in &iface.addresses {
                lines.push(Line::from(Span::styled(
                    format!("{}{}", ADDRESS_INDENT, addr),
                    Style::default().fg(COLOR_DIM),
                )));
            }
        }
    }

    // Keep the focused row on screen
    let scroll = match focused_line {
        Some(line) if area.height > 0 && line >= area.height as usize => {
            (line + 1 - area.height as usize) as u16
        }
        _ => 0,
    };

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

fn render_buttons(frame: &mut Frame, area: Rect, session: &Session) {
    let focus = session.focus_zone();
    let (label, color) = match session.lifecycle() {
        CaptureLifecycle::Idle => ("[ Start ]", COLOR_ACCENT),
        CaptureLifecycle::Recording => ("[ Stop ]", COLOR_ACTIVE),
        CaptureLifecycle::Stopping => ("[ Stopping… ]", COLOR_STOPPING),
    };

    let line = Line::from(vec![
        button(label, color, focus == FocusZone::StartStop),
        Span::raw("  "),
        button("[ Clear ]", COLOR_ACCENT, focus == FocusZone::Clear),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn button(label: &str, color: ratatui::style::Color, focused: bool) -> Span<'_> {
    let style = if focused {
        Style::default()
            .fg(COLOR_FOCUS)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(color)
    };
    Span::styled(label, style)
}

fn render_error_line(frame: &mut Frame, area: Rect, session: &Session) {
    if let Some(message) = session.error_log() {
        let line = Line::from(Span::styled(
            format!("✗ {}", message),
            Style::default().fg(COLOR_ERROR),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}
