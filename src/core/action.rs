//! # Actions
//!
//! Everything that can happen in the widget becomes an `Action`.
//! User presses Enter? That's `Action::Submit(text)`.
//! Server replies? That's `Action::ReplyReceived { id, text }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing the I/O the caller must perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::client::ClientError;
use crate::core::message::Direction;
use crate::core::state::{App, RequestId, Visibility};

#[derive(Debug)]
pub enum Action {
    /// Trigger control activated.
    OpenWidget,
    /// Close control activated.
    CloseWidget,
    /// Send control or Enter, carrying the raw input text.
    Submit(String),
    ReplyReceived { id: RequestId, text: String },
    RequestFailed { id: RequestId, error: ClientError },
    Quit,
}

/// Side effect requested by `update`.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Deliver `text` to the server; report back with the same `id`.
    SendMessage { id: RequestId, text: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::OpenWidget => {
            if !app.is_open() {
                debug!("Widget opened");
                app.set_visibility(Visibility::Open);
            }
            Effect::None
        }
        Action::CloseWidget => {
            if app.is_open() {
                debug!("Widget closed");
                app.set_visibility(Visibility::Closed);
            }
            Effect::None
        }
        Action::Submit(raw) => {
            if !app.is_open() {
                debug!("Submit ignored: widget is closed");
                return Effect::None;
            }
            let text = raw.trim();
            if text.is_empty() {
                return Effect::None;
            }
            let text = text.to_string();
            app.push_message(text.clone(), Direction::Sent);
            let id = app.begin_request();
            info!("[{}] Submitting message #{} ({} bytes)", app.session_tag(), id, text.len());
            Effect::SendMessage { id, text }
        }
        Action::ReplyReceived { id, text } => {
            if !app.finish_request(id) {
                warn!("[{}] Reply for unknown request #{}", app.session_tag(), id);
            }
            info!("[{}] Reply for #{} ({} bytes)", app.session_tag(), id, text.len());
            app.push_message(text, Direction::Received);
            Effect::None
        }
        Action::RequestFailed { id, error } => {
            if !app.finish_request(id) {
                warn!("[{}] Failure for unknown request #{}", app.session_tag(), id);
            }
            warn!("[{}] Message #{} not delivered: {}", app.session_tag(), id, error);
            app.push_message(format!("Message not delivered: {error}"), Direction::System);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
