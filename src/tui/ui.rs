//! Frame composition and click hit-testing.
//!
//! ```text
//! Closed:                         Open:
//! ┌──────────────────────┐        ┌──────────────────────┐
//! │                      │        │   ╭───────────────╮  │
//! │                      │        │   │Chat       [x] │  │
//! │                      │        │   │  messages...  │  │
//! │           ╭────────╮ │        │   │╭─────────╮╭──╮│  │
//! │           │  Chat  │ │        │   ││ input   ││Se││  │
//! │           ╰────────╯ │        │   ╰───────────────╯  │
//! └──────────────────────┘        └──────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ChatButton, MessageList, PanelHeader};

/// Largest panel size; smaller terminals get the whole screen.
const PANEL_MAX_WIDTH: u16 = 60;
const PANEL_MAX_HEIGHT: u16 = 22;
const SEND_BUTTON_WIDTH: u16 = 8;
const INPUT_ROW_HEIGHT: u16 = 3;

/// Clickable regions from the most recent frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HitAreas {
    pub trigger: Option<Rect>,
    pub close: Option<Rect>,
    pub send: Option<Rect>,
}

/// A clickable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Trigger,
    Close,
    Send,
}

impl HitAreas {
    /// Which control (if any) is under the screen cell `(column, row)`.
    pub fn hit(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        let inside = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(pos));
        if inside(self.trigger) {
            Some(Control::Trigger)
        } else if inside(self.close) {
            Some(Control::Close)
        } else if inside(self.send) {
            Some(Control::Send)
        } else {
            None
        }
    }
}

/// Bottom-right anchored panel rectangle.
pub fn panel_area(screen: Rect) -> Rect {
    let width = PANEL_MAX_WIDTH.min(screen.width);
    let height = PANEL_MAX_HEIGHT.min(screen.height);
    Rect::new(
        screen.x + screen.width - width,
        screen.y + screen.height - height,
        width,
        height,
    )
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let screen = frame.area();
    tui.hit_areas = HitAreas::default();

    if app.is_open() {
        draw_panel(frame, screen, app, tui);
    } else {
        let area = ChatButton::area(screen);
        ChatButton::new(app.unread()).render(frame, area);
        tui.hit_areas.trigger = Some(area);
    }
}

fn draw_panel(frame: &mut Frame, screen: Rect, app: &App, tui: &mut TuiState) {
    let panel = panel_area(screen);
    frame.render_widget(Clear, panel);

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    use Constraint::{Length, Min};
    let [header_area, list_area, input_row] =
        Layout::vertical([Length(1), Min(0), Length(INPUT_ROW_HEIGHT)]).areas(inner);
    let [input_area, send_area] =
        Layout::horizontal([Min(0), Length(SEND_BUTTON_WIDTH)]).areas(input_row);

    PanelHeader::new(app.title.clone(), app.pending_count()).render(frame, header_area);
    MessageList::new(&mut tui.message_list, app.messages(), app.clock).render(frame, list_area);
    tui.input_box.render(frame, input_area);
    draw_send_button(frame, send_area, tui.input_box.is_blank());

    tui.hit_areas.close = Some(PanelHeader::close_area(header_area));
    tui.hit_areas.send = Some(send_area);
}

/// The send control. Dimmed while there is nothing to send.
fn draw_send_button(frame: &mut Frame, area: Rect, disabled: bool) {
    let style = if disabled {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new("Send")
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
    frame.render_widget(button, area);
}
