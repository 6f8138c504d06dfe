//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::ClockStyle;
use crate::client::{ClientError, MessageClient};
use crate::core::state::{App, Visibility};

/// A client for tests that don't need real HTTP calls. Echoes the input.
pub struct NoopClient;

#[async_trait]
impl MessageClient for NoopClient {
    fn name(&self) -> &str {
        "noop"
    }

    async fn send_message(&self, text: &str) -> Result<String, ClientError> {
        Ok(text.to_string())
    }
}

/// Creates a closed test App with a NoopClient.
pub fn test_app() -> App {
    App::new(Arc::new(NoopClient), ClockStyle::H24)
}

/// Creates a test App with the panel already open.
pub fn open_app() -> App {
    let mut app = test_app();
    app.set_visibility(Visibility::Open);
    app
}
