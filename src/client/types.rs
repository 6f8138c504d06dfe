//! Wire types for the `/send_message` endpoint.
//!
//! ```text
//! POST /send_message   {"message": "Hello"}
//! 200 OK               {"message": "Hi there"}
//! ```

use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SendMessageRequest<'a> {
    pub message: &'a str,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SendMessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_message_object() {
        let body = serde_json::to_value(SendMessageRequest { message: "Hello" }).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Hello" }));
    }

    #[test]
    fn response_ignores_extra_fields() {
        let resp: SendMessageResponse =
            serde_json::from_str(r#"{"message":"Hi there","session_id":4}"#).unwrap();
        assert_eq!(resp.message, "Hi there");
    }

    #[test]
    fn response_without_message_is_rejected() {
        let resp = serde_json::from_str::<SendMessageResponse>(r#"{"reply":"Hi"}"#);
        assert!(resp.is_err());
    }
}
