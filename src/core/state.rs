//! # Application State
//!
//! Core state of the chat widget. Domain logic only, no terminal types.
//! Presentation state (scroll offsets, input buffer) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn MessageClient>  // delivers messages
//! ├── session_id: Uuid                // one per run
//! ├── visibility: Visibility          // Open | Closed
//! ├── messages: Vec<ChatMessage>      // append-only history
//! ├── pending: BTreeSet<RequestId>    // requests awaiting a reply
//! └── unread: usize                   // replies that landed while Closed
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::BTreeSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::ClockStyle;
use crate::client::MessageClient;
use crate::core::config::ResolvedConfig;
use crate::core::message::{ChatMessage, Direction};

/// Identifies one outgoing request. Assigned in submission order.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Open,
    #[default]
    Closed,
}

pub struct App {
    pub client: Arc<dyn MessageClient>,
    pub session_id: Uuid,
    pub clock: ClockStyle,
    pub title: String,
    visibility: Visibility,
    messages: Vec<ChatMessage>,
    pending: BTreeSet<RequestId>,
    next_request_id: RequestId,
    unread: usize,
}

impl App {
    pub fn new(client: Arc<dyn MessageClient>, clock: ClockStyle) -> Self {
        Self {
            client,
            session_id: Uuid::new_v4(),
            clock,
            title: crate::core::config::DEFAULT_TITLE.to_string(),
            visibility: Visibility::default(),
            messages: Vec::new(),
            pending: BTreeSet::new(),
            next_request_id: 1,
            unread: 0,
        }
    }

    pub fn from_config(client: Arc<dyn MessageClient>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(client, config.clock);
        app.title = config.title.clone();
        if config.start_open {
            app.visibility = Visibility::Open;
        }
        app
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of requests still waiting on the server.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Replies (or failures) that arrived while the panel was closed.
    pub fn unread(&self) -> usize {
        self.unread
    }

    pub(crate) fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
        if visibility == Visibility::Open {
            self.unread = 0;
        }
    }

    /// Short session prefix for log lines.
    pub fn session_tag(&self) -> String {
        let mut tag = self.session_id.simple().to_string();
        tag.truncate(8);
        tag
    }

    /// Appends a message stamped with the current time.
    pub fn push_message(&mut self, text: impl Into<String>, direction: Direction) {
        self.messages.push(ChatMessage::new(text, direction));
        if direction != Direction::Sent && !self.is_open() {
            self.unread += 1;
        }
    }

    /// Allocates the next request id and marks it pending.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.pending.insert(id);
        id
    }

    /// Clears a pending request. Returns false if `id` was not pending.
    pub(crate) fn finish_request(&mut self, id: RequestId) -> bool {
        self.pending.remove(&id)
    }
}
