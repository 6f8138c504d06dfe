use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

/// Errors that can occur while delivering a message.
#[derive(Debug)]
pub enum ClientError {
    /// Could not reach the server (DNS, connection refused, reset).
    Network(String),
    /// No response within the configured timeout.
    Timeout(Duration),
    /// The server answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body was not `{"message": "..."}`.
    Parse(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(msg) => write!(f, "network error: {msg}"),
            ClientError::Timeout(after) => {
                write!(f, "no reply after {}s", after.as_secs_f32())
            }
            ClientError::Api { status, message } if message.is_empty() => {
                write!(f, "server error (HTTP {status})")
            }
            ClientError::Api { status, message } => {
                write!(f, "server error (HTTP {status}): {message}")
            }
            ClientError::Parse(msg) => write!(f, "unreadable reply: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

#[async_trait]
pub trait MessageClient: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Delivers one message and returns the server's reply text.
    async fn send_message(&self, text: &str) -> Result<String, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_api_error_with_and_without_body() {
        let with_body = ClientError::Api {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(with_body.to_string(), "server error (HTTP 500): boom");

        let without = ClientError::Api {
            status: 404,
            message: String::new(),
        };
        assert_eq!(without.to_string(), "server error (HTTP 404)");
    }

    #[test]
    fn display_timeout() {
        let err = ClientError::Timeout(Duration::from_millis(1500));
        assert_eq!(err.to_string(), "no reply after 1.5s");
    }
}
