use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::config::{FILTER_CHAR_LIMIT, FILTER_PLACEHOLDER};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR, COLOR_DIM, COLOR_FOCUS};

/// Single-line editor for the capture filter expression.
///
/// Features:
/// - Insert, delete and backspace at a character cursor
/// - Cursor movement (left/right/home/end)
/// - A character limit; inserts past it are dropped
/// - Placeholder text while empty
/// - Horizontal scrolling when the text exceeds the widget width
///
/// The cursor is a character index, not a byte offset, so multi-byte input
/// edits cleanly.
#[derive(Debug, Clone)]
pub struct FilterInput {
    content: String,
    cursor_position: usize,
    char_limit: usize,
    placeholder: String,
}

impl Default for FilterInput {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterInput {
    /// Empty filter with the default placeholder and limit.
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor_position: 0,
            char_limit: FILTER_CHAR_LIMIT,
            placeholder: FILTER_PLACEHOLDER.to_string(),
        }
    }

    /// Insert a character at the cursor. Ignored at the character limit.
    pub fn insert_char(&mut self, c: char) {
        if self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Delete the character under the cursor (Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.len() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.len();
    }

    /// The current filter text, exactly as typed.
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Cursor position as a character index
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the content (truncated to the limit) and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.content = value.chars().take(self.char_limit).collect();
        self.cursor_position = self.len();
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// First visible character so that the cursor stays inside `visible_width`.
    fn scroll_offset(&self, visible_width: usize) -> usize {
        if visible_width == 0 || self.cursor_position < visible_width {
            return 0;
        }
        // Leave one cell for the cursor block
        self.cursor_position - visible_width + 1
    }

    /// Render the editor inside a bordered block with the given title
    pub fn render_with_title(&self, area: Rect, buf: &mut Buffer, title: &str, focused: bool) {
        let border_color = if focused { COLOR_FOCUS } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;

        if self.is_empty() {
            let style = Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC);
            buf.set_stringn(inner.x, inner.y, &self.placeholder, width, style);
        } else {
            let offset = self.scroll_offset(width);
            let visible: String = self.content.chars().skip(offset).take(width).collect();
            buf.set_stringn(inner.x, inner.y, &visible, width, Style::default().fg(COLOR_ACCENT));
        }

        if focused {
            let offset = self.scroll_offset(width);
            let cursor_x = (self.cursor_position - offset) as u16;
            if cursor_x < inner.width {
                let under = if self.is_empty() {
                    self.placeholder.chars().next().unwrap_or(' ')
                } else {
                    self.content.chars().nth(self.cursor_position).unwrap_or(' ')
                };
                buf.set_string(
                    inner.x + cursor_x,
                    inner.y,
                    under.to_string(),
                    Style::default().fg(Color::Black).bg(COLOR_CURSOR),
                );
            }
        }
    }
}

/// A renderable wrapper for FilterInput that implements the Widget trait
pub struct FilterInputWidget<'a> {
    input: &'a FilterInput,
    title: &'a str,
    focused: bool,
}

impl<'a> FilterInputWidget<'a> {
    pub fn new(input: &'a FilterInput, title: &'a str, focused: bool) -> Self {
        Self {
            input,
            title,
            focused,
        }
    }
}

impl Widget for FilterInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input
            .render_with_title(area, buf, self.title, self.focused);
    }
}
