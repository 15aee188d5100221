//! Single-line text input widget
//!
//! Render-only: the text lives in the palette session or the newsletter
//! form. The cursor always sits at the end of the text, and when the text is
//! wider than the field only its tail is shown.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A text field
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    value: &'a str,
    placeholder: &'a str,
    prefix: &'a str,
    focused: bool,
    disabled: bool,
    text_style: Style,
    placeholder_style: Style,
    cursor_style: Style,
}

impl<'a> TextInput<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            placeholder: "",
            prefix: "",
            focused: false,
            disabled: false,
            text_style: Style::default(),
            placeholder_style: Style::default().fg(Color::DarkGray),
            cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Text drawn before the value, e.g. a search glyph
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Disabled fields are dimmed and show no cursor
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Longest suffix of the value that fits in `width` columns
    fn visible_tail(&self, width: usize) -> &'a str {
        if self.value.width() <= width {
            return self.value;
        }
        let mut used = 0;
        let mut start = self.value.len();
        for (byte, c) in self.value.char_indices().rev() {
            used += c.width().unwrap_or(0);
            if used > width {
                break;
            }
            start = byte;
        }
        &self.value[start..]
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let prefix_width = self.prefix.width() as u16;
        if prefix_width > 0 {
            buf.set_stringn(
                area.x,
                area.y,
                self.prefix,
                area.width as usize,
                self.text_style,
            );
        }

        let field_x = area.x + prefix_width.min(area.width);
        let field_width = area.right().saturating_sub(field_x) as usize;
        if field_width == 0 {
            return;
        }

        let show_cursor = self.focused && !self.disabled;
        let text_style = if self.disabled {
            self.text_style.add_modifier(Modifier::DIM)
        } else {
            self.text_style
        };

        if self.value.is_empty() {
            buf.set_stringn(
                field_x,
                area.y,
                self.placeholder,
                field_width,
                self.placeholder_style,
            );
            if show_cursor {
                buf.set_string(field_x, area.y, " ", self.cursor_style);
            }
            return;
        }

        // Leave a column for the cursor
        let room = if show_cursor { field_width - 1 } else { field_width };
        let tail = self.visible_tail(room);
        buf.set_stringn(field_x, area.y, tail, room, text_style);

        if show_cursor {
            let cursor_x = field_x + tail.width() as u16;
            if cursor_x < area.right() {
                buf.set_string(cursor_x, area.y, " ", self.cursor_style);
            }
        }
    }
}
