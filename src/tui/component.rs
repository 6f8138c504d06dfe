use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something the chat widget draws: the trigger, the panel header, a bubble,
/// the message list or the input field.
///
/// `render` borrows mutably so the message list can refresh its height cache
/// and scroll offset while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw terminal events into a component-level event.
pub trait EventHandler {
    type Event;

    /// `None` when the event is not for this component or changed nothing
    /// the caller needs to know about.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
