//! # PanelHeader Component
//!
//! Top row of the open chat panel: the title, a delivery indicator while
//! requests are outstanding, and the close control on the right.
//!
//! ## Stateless Component
//!
//! All fields are props. The close control's position is exposed through
//! [`PanelHeader::close_area`] so rendering and click hit-testing agree on it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::text::sanitize;
use crate::tui::component::Component;

/// Glyph of the close control.
pub const CLOSE_LABEL: &str = "[x]";

pub struct PanelHeader {
    pub title: String,
    /// Requests still waiting on the server
    pub pending: usize,
}

impl PanelHeader {
    pub fn new(title: String, pending: usize) -> Self {
        Self { title, pending }
    }

    /// Where the close control sits inside a header occupying `area`.
    pub fn close_area(area: Rect) -> Rect {
        let width = (CLOSE_LABEL.len() as u16).min(area.width);
        Rect::new(area.x + area.width - width, area.y, width, area.height.min(1))
    }

    fn status_text(&self) -> Option<String> {
        match self.pending {
            0 => None,
            1 => Some("waiting for reply...".to_string()),
            n => Some(format!("waiting for {n} replies...")),
        }
    }
}

impl Component for PanelHeader {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            sanitize(&self.title).into_owned(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )];
        if let Some(status) = self.status_text() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                status,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        let close = PanelHeader::close_area(area);
        frame.render_widget(
            Span::styled(CLOSE_LABEL, Style::default().fg(Color::Red)),
            close,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(header: &mut PanelHeader, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| header.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn header_shows_title_and_close_control() {
        let text = render(&mut PanelHeader::new("Chat".into(), 0), 40);
        assert!(text.starts_with("Chat"));
        assert!(text.ends_with("[x]"));
        assert!(!text.contains("waiting"));
    }

    #[test]
    fn title_control_characters_are_escaped() {
        let text = render(&mut PanelHeader::new("\u{1b}[31mSupport".into(), 0), 40);
        assert!(text.starts_with("\\u{1b}[31mSupport"), "{text:?}");
    }

    #[test]
    fn header_shows_pending_replies() {
        let text = render(&mut PanelHeader::new("Chat".into(), 1), 40);
        assert!(text.contains("waiting for reply"));
        let text = render(&mut PanelHeader::new("Chat".into(), 3), 40);
        assert!(text.contains("waiting for 3 replies"));
    }

    #[test]
    fn close_area_is_right_edge() {
        let area = Rect::new(10, 5, 30, 1);
        assert_eq!(PanelHeader::close_area(area), Rect::new(37, 5, 3, 1));
    }
}
