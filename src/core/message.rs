//! # Chat Messages
//!
//! A `ChatMessage` is created for every send, receive, or local failure
//! notice. It is never mutated after construction; the controller only
//! appends new ones.

use std::borrow::Cow;

use chrono::{DateTime, Local};

use crate::ClockStyle;
use crate::core::text;

/// Who a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Typed locally and echoed immediately.
    Sent,
    /// Reply text supplied by the server.
    Received,
    /// Local notice (e.g. a failed delivery). Never sent to the server.
    System,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    text: String,
    direction: Direction,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    /// Creates a message stamped with the current local time.
    pub fn new(text: impl Into<String>, direction: Direction) -> Self {
        Self::at(text, direction, Local::now())
    }

    pub fn at(text: impl Into<String>, direction: Direction, timestamp: DateTime<Local>) -> Self {
        Self {
            text: text.into(),
            direction,
            timestamp,
        }
    }

    /// The raw text exactly as submitted or received.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text with terminal control sequences neutralized.
    pub fn display_text(&self) -> Cow<'_, str> {
        text::sanitize(&self.text)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// `HH:MM` (or `hh:MM AM`) label for the bubble.
    pub fn time_label(&self, clock: ClockStyle) -> String {
        self.timestamp.format(clock.pattern()).to_string()
    }
}
