//! # Core Widget Logic
//!
//! This module contains the chat widget's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (widget state)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   client   │
//!            │  Adapter   │            │  (reqwest) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all widget state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`message`]: `ChatMessage` and its timestamp label
//! - [`text`]: Display sanitization for message text
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod message;
pub mod state;
pub mod text;
