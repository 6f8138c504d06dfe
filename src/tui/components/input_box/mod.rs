//! # InputBox Component
//!
//! Single-line message field.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste
//! - Handle editing (backspace, delete, cursor movement)
//! - Hand over the text on submission, clearing the field
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. Submission goes through
//! [`InputBox::take_submission`] so the same path serves Enter and the
//! `[Send]` control.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{next_char_boundary, prev_char_boundary, visible_window};

const PLACEHOLDER: &str = "Type a message...";
/// Left + right borders.
const HORIZONTAL_OVERHEAD: u16 = 2;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User pressed Enter
    Submit,
    /// Buffer or cursor changed
    ContentChanged,
}

pub struct InputBox {
    buffer: String,
    /// Byte offset into `buffer`, always on a char boundary
    cursor: usize,
    /// Whether the terminal cursor should be placed in this box
    pub focused: bool,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            focused: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// True when submitting now would send nothing.
    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// Clears the field and returns its content, unless the content is blank,
    /// in which case the field is left untouched and `None` is returned.
    pub fn take_submission(&mut self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        self.cursor = 0;
        Some(std::mem::take(&mut self.buffer))
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        let width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            let (start, _) = visible_window(&self.buffer, self.cursor, width);
            Paragraph::new(&self.buffer[start..]).style(Style::default().fg(Color::White))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused && inner.width > 0 && inner.height > 0 {
            let (_, column) = visible_window(&self.buffer, self.cursor, width);
            frame.set_cursor_position((inner.x + column, inner.y));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut utf8 = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut utf8));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Single-line field: line breaks become spaces.
                let flattened: String = text
                    .chars()
                    .map(|c| if c == '\r' || c == '\n' { ' ' } else { c })
                    .filter(|c| !c.is_control() || *c == '\t')
                    .collect();
                if flattened.is_empty() {
                    return None;
                }
                self.insert_str(&flattened);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
