use std::borrow::Cow;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::ClockStyle;
use crate::core::message::{ChatMessage, Direction};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Bubbles never take more than this share of the list width (percent).
const MAX_WIDTH_PERCENT: u16 = 80;

/// A stateless chat bubble for one `ChatMessage`.
///
/// Sent bubbles hug the right edge, received bubbles the left, system notices
/// are centered. The border title carries the sender label and the timestamp.
///
/// # Height Calculation
///
/// [`Bubble::measure`] wraps the text with `textwrap` and the render pass
/// draws those same lines unwrapped, so the height the parent list reserves
/// always holds the whole message.
#[derive(Clone, Copy)]
pub struct Bubble<'a> {
    pub message: &'a ChatMessage,
    pub clock: ClockStyle,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a ChatMessage, clock: ClockStyle) -> Self {
        Self { message, clock }
    }

    /// Returns `(width, height)` of the bubble when laid out in a list of
    /// `list_width` columns.
    pub fn measure(message: &ChatMessage, clock: ClockStyle, list_width: u16) -> (u16, u16) {
        let max_width = max_width(list_width);
        let content_width = max_width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Degenerate case: too narrow for borders + padding.
            return (list_width, 1);
        }

        let text = message.display_text();
        let lines = wrap_lines(&text, content_width);
        let text_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let title_width = (label(message.direction()).width()
            + message.time_label(clock).width()
            + 1) as u16;

        let width = (text_width.max(title_width) + HORIZONTAL_OVERHEAD).min(max_width);
        let height = (lines.len() as u16).max(1) + VERTICAL_OVERHEAD;
        (width, height)
    }

    /// Horizontal placement of a `width`-wide bubble inside `area`.
    fn placement(direction: Direction, area: Rect, width: u16) -> Rect {
        let width = width.min(area.width);
        let x = match direction {
            Direction::Sent => area.x + area.width - width,
            Direction::Received => area.x,
            Direction::System => area.x + (area.width - width) / 2,
        };
        Rect::new(x, area.y, width, area.height)
    }
}

fn max_width(list_width: u16) -> u16 {
    (list_width * MAX_WIDTH_PERCENT / 100)
        .max(HORIZONTAL_OVERHEAD + 1)
        .min(list_width)
}

/// Lines of `text` as they appear inside a bubble with `width` content columns.
fn wrap_lines(text: &str, width: u16) -> Vec<Cow<'_, str>> {
    let options = textwrap::Options::new(width.max(1) as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(text.trim(), options)
}

fn label(direction: Direction) -> &'static str {
    match direction {
        Direction::Sent => "you",
        Direction::Received => "reply",
        Direction::System => "notice",
    }
}

pub(crate) fn direction_style(direction: Direction) -> Style {
    match direction {
        Direction::Sent => Style::default().fg(Color::Green),
        Direction::Received => Style::default().fg(Color::Blue),
        Direction::System => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    }
}

impl<'a> Widget for Bubble<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let direction = self.message.direction();
        let (width, _) = Bubble::measure(self.message, self.clock, area.width);
        let bubble_area = Bubble::placement(direction, area, width);

        let style = direction_style(direction);
        let border_style = style.add_modifier(Modifier::DIM);
        let time = self.message.time_label(self.clock);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(label(direction)).left_aligned())
            .title(Line::from(time).right_aligned())
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(bubble_area);
        block.render(bubble_area, buf);

        let alignment = match direction {
            Direction::System => Alignment::Center,
            _ => Alignment::Left,
        };
        let text = self.message.display_text();
        let content_width = max_width(area.width).saturating_sub(HORIZONTAL_OVERHEAD);
        let lines: Vec<Line> = wrap_lines(&text, content_width)
            .into_iter()
            .map(|line| Line::from(line.into_owned()))
            .collect();
        Paragraph::new(Text::from(lines))
            .style(style)
            .alignment(alignment)
            .render(inner_area, buf);
    }
}
