//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the widget,
//! and translates keyboard and mouse events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! Each loop iteration draws (when something changed), polls terminal
//! events, dispatches them, then drains the action channel fed by request
//! tasks. Replies are therefore applied on the UI thread in arrival order.
//!
//! ## Bindings
//!
//! | State  | Input                    | Effect         |
//! |--------|--------------------------|----------------|
//! | Closed | click trigger, Enter, ^O | open           |
//! | Closed | Esc                      | quit           |
//! | Open   | click `[x]`, Esc         | close          |
//! | Open   | click `[Send]`, Enter    | submit         |
//! | any    | ^C                       | quit           |

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::client::{HttpMessageClient, MessageClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, RequestId};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::{Control, HitAreas};

/// How long the loop sleeps waiting for input before checking the action channel.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core widget logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
    /// Clickable regions from the last drawn frame
    pub hit_areas: HitAreas,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            hit_areas: HitAreas::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol reports press/release separately; event.rs
        // filters releases. Terminals without support ignore it.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBar,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = HttpMessageClient::from_config(&config);
    info!("Sending messages to {}", client.url());
    let mut app = App::from_config(Arc::new(client), &config);
    let mut tui = TuiState::new();
    info!("Chat session {} started", app.session_id);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from request tasks
    let (tx, rx) = mpsc::channel();
    let mut needs_redraw = true;

    'event_loop: loop {
        if needs_redraw {
            tui.input_box.focused = app.is_open();
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_INTERVAL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match dispatch(&mut app, &mut tui, event) {
                Effect::None => {}
                Effect::SendMessage { id, text } => {
                    spawn_send(app.client.clone(), id, text, tx.clone());
                }
                Effect::Quit => break 'event_loop,
            }
        }

        // Apply replies and failures from request tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                break 'event_loop;
            }
            tui.message_list.scroll_to_bottom();
        }
    }

    info!(
        "Chat session {} ended ({} messages, {} unanswered)",
        app.session_id,
        app.messages().len(),
        app.pending_count()
    );
    drop(_terminal_mode_guard);
    ratatui::restore();
    Ok(())
}

/// Routes one terminal event according to the widget's visibility.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if event == TuiEvent::ForceQuit {
        return update(app, Action::Quit);
    }

    if let TuiEvent::MouseClick(column, row) = event {
        return match tui.hit_areas.hit(column, row) {
            Some(Control::Trigger) => update(app, Action::OpenWidget),
            Some(Control::Close) => update(app, Action::CloseWidget),
            Some(Control::Send) => submit_input(app, tui),
            None => Effect::None,
        };
    }

    if !app.is_open() {
        return match event {
            TuiEvent::Submit | TuiEvent::OpenShortcut => update(app, Action::OpenWidget),
            TuiEvent::Escape => update(app, Action::Quit),
            _ => Effect::None,
        };
    }

    match event {
        TuiEvent::Escape => update(app, Action::CloseWidget),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToBottom => {
            tui.message_list.handle_event(&event);
            Effect::None
        }
        _ => match tui.input_box.handle_event(&event) {
            Some(InputEvent::Submit) => submit_input(app, tui),
            Some(InputEvent::ContentChanged) | None => Effect::None,
        },
    }
}

/// Shared by Enter and the send control.
fn submit_input(app: &mut App, tui: &mut TuiState) -> Effect {
    let Some(text) = tui.input_box.take_submission() else {
        return Effect::None;
    };
    tui.message_list.scroll_to_bottom();
    update(app, Action::Submit(text))
}

fn spawn_send(
    client: Arc<dyn MessageClient>,
    id: RequestId,
    text: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning request #{} via {}", id, client.name());
    tokio::spawn(async move {
        let action = match client.send_message(&text).await {
            Ok(reply) => Action::ReplyReceived { id, text: reply },
            Err(error) => Action::RequestFailed { id, error },
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver result of request #{}: receiver dropped", id);
        }
    });
}
