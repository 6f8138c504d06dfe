//! # ChatButton Component
//!
//! The trigger control shown while the panel is closed. Shows a badge with
//! the number of replies that arrived while closed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

/// Outer size of the button, borders included.
pub const BUTTON_WIDTH: u16 = 14;
pub const BUTTON_HEIGHT: u16 = 3;

pub struct ChatButton {
    pub unread: usize,
}

impl ChatButton {
    pub fn new(unread: usize) -> Self {
        Self { unread }
    }

    /// Anchors the button to the bottom-right corner of `area`.
    pub fn area(area: Rect) -> Rect {
        let width = BUTTON_WIDTH.min(area.width);
        let height = BUTTON_HEIGHT.min(area.height);
        Rect::new(
            area.x + area.width - width,
            area.y + area.height - height,
            width,
            height,
        )
    }

    fn label(&self) -> String {
        match self.unread {
            0 => "Chat".to_string(),
            n if n > 99 => "Chat (99+)".to_string(),
            n => format!("Chat ({n})"),
        }
    }
}

impl Component for ChatButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let accent = if self.unread > 0 { Color::Yellow } else { Color::Cyan };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent));
        let button = Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .block(block);
        frame.render_widget(button, area);
    }
}
