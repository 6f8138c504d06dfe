//! Chatbox library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod client;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How message timestamps are labelled in the chat panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ClockStyle {
    /// `14:05`
    #[default]
    #[value(name = "24h")]
    #[serde(rename = "24h")]
    H24,
    /// `02:05 PM`
    #[value(name = "12h")]
    #[serde(rename = "12h")]
    H12,
}

impl ClockStyle {
    /// strftime pattern for this clock style.
    pub fn pattern(self) -> &'static str {
        match self {
            ClockStyle::H24 => "%H:%M",
            ClockStyle::H12 => "%I:%M %p",
        }
    }
}
