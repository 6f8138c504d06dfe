//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `ChatButton`: trigger control shown while the panel is closed
//! - `PanelHeader`: title, delivery indicator, close control
//! - `Bubble`: a single chat message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: single-line message field
//! - `MessageList`: scrollable conversation view with layout caching
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── trigger.rs       (Closed-state chat button)
//! ├── header.rs        (Panel header with close control)
//! ├── message.rs       (Single bubble renderer)
//! ├── message_list.rs  (Scrollable message container)
//! └── input_box/       (Message field)
//! ```

pub mod header;
pub mod input_box;
pub mod message;
pub mod message_list;
pub mod trigger;

pub use header::PanelHeader;
pub use input_box::{InputBox, InputEvent};
pub use message_list::{MessageList, MessageListState};
pub use trigger::ChatButton;
