//! HTTP transport: one `POST` per message, JSON in and out.
//!
//! The endpoint is unauthenticated. Every failure mode (transport, status,
//! body shape, timeout) comes back as a `ClientError` so the controller can
//! show it instead of silently dropping the reply.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::client::{ClientError, MessageClient, SendMessageRequest, SendMessageResponse};
use crate::core::config::ResolvedConfig;

/// Longest error body kept in `ClientError::Api`.
const MAX_ERROR_BODY: usize = 200;

pub struct HttpMessageClient {
    url: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl HttpMessageClient {
    /// `url` is the full endpoint URL, e.g. `http://127.0.0.1:5000/send_message`.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.endpoint_url(), config.timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MessageClient for HttpMessageClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn send_message(&self, text: &str) -> Result<String, ClientError> {
        info!("POST {} ({} bytes)", self.url, text.len());

        let mut request = self
            .client
            .post(&self.url)
            .json(&SendMessageRequest { message: text });
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            truncate_on_char_boundary(&mut body, MAX_ERROR_BODY);
            warn!("Server returned {}: {}", status, body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let reply: SendMessageResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Malformed reply body: {}", e);
            ClientError::Parse(e.to_string())
        })?;

        debug!("Reply received ({} bytes)", reply.message.len());
        Ok(reply.message)
    }
}

impl HttpMessageClient {
    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        match self.timeout {
            Some(timeout) if e.is_timeout() => {
                warn!("Request to {} timed out after {:?}", self.url, timeout);
                ClientError::Timeout(timeout)
            }
            _ => {
                warn!("Request to {} failed: {}", self.url, e);
                ClientError::Network(e.to_string())
            }
        }
    }
}

fn truncate_on_char_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
}
