use std::sync::Arc;
use std::time::Duration;

use chatbox::ClockStyle;
use chatbox::client::{ClientError, HttpMessageClient, MessageClient};
use chatbox::core::action::{Action, Effect, update};
use chatbox::core::config::{CliOverrides, ChatboxConfig, resolve_with_env};
use chatbox::core::message::Direction;
use chatbox::core::state::App;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Client pointed at the mock server's `/send_message`.
fn client_for(server: &MockServer, timeout: Option<Duration>) -> HttpMessageClient {
    HttpMessageClient::new(format!("{}/send_message", server.uri()), timeout)
}

async fn mount_reply(server: &MockServer, reply: &str) {
    Mock::given(method("POST"))
        .and(path("/send_message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": reply })))
        .mount(server)
        .await;
}

// ============================================================================
// HTTP Contract
// ============================================================================

#[tokio::test]
async fn test_posts_message_json_and_returns_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send_message"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "message": "Hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Hi there" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let reply = client.send_message("Hello").await;

    assert_eq!(reply.unwrap(), "Hi there");
}

#[tokio::test]
async fn test_extra_response_fields_are_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send_message"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "ok", "model": "echo", "latency_ms": 3 })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    assert_eq!(client.send_message("ping").await.unwrap(), "ok");
}

#[tokio::test]
async fn test_server_error_is_reported_with_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send_message"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let result = client.send_message("Hello").await;

    match result {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_route_is_api_error() {
    let mock_server = MockServer::start().await;

    let client = client_for(&mock_server, None);
    let result = client.send_message("Hello").await;

    assert!(matches!(result, Err(ClientError::Api { status: 404, .. })));
}

#[tokio::test]
async fn test_malformed_reply_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send_message"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let result = client.send_message("Hello").await;

    assert!(matches!(result, Err(ClientError::Parse(_))));
}

#[tokio::test]
async fn test_reply_without_message_field_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send_message"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "Hi" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, None);
    let result = client.send_message("Hello").await;

    assert!(matches!(result, Err(ClientError::Parse(_))));
}

#[tokio::test]
async fn test_slow_server_times_out_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send_message"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "too late" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let timeout = Duration::from_millis(200);
    let client = client_for(&mock_server, Some(timeout));
    let result = client.send_message("Hello").await;

    match result {
        Err(ClientError::Timeout(elapsed)) => assert_eq!(elapsed, timeout),
        other => panic!("Expected Timeout, got {:?}", other),
    }
}

// ============================================================================
// Controller + Client
// ============================================================================

#[tokio::test]
async fn test_submitted_message_round_trips_through_controller() {
    let mock_server = MockServer::start().await;
    mount_reply(&mock_server, "Hi there").await;

    let client: Arc<dyn MessageClient> = Arc::new(client_for(&mock_server, None));
    let mut app = App::new(client.clone(), ClockStyle::H24);
    update(&mut app, Action::OpenWidget);

    let Effect::SendMessage { id, text } = update(&mut app, Action::Submit("  Hello  ".into()))
    else {
        panic!("Expected SendMessage effect");
    };
    assert_eq!(text, "Hello");

    let action = match client.send_message(&text).await {
        Ok(reply) => Action::ReplyReceived { id, text: reply },
        Err(error) => Action::RequestFailed { id, error },
    };
    update(&mut app, action);

    let messages = app.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text(), "Hello");
    assert_eq!(messages[0].direction(), Direction::Sent);
    assert_eq!(messages[1].text(), "Hi there");
    assert_eq!(messages[1].direction(), Direction::Received);
    assert_eq!(app.pending_count(), 0);
}

#[tokio::test]
async fn test_server_failure_becomes_system_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/send_message"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client: Arc<dyn MessageClient> = Arc::new(client_for(&mock_server, None));
    let mut app = App::new(client.clone(), ClockStyle::H24);
    update(&mut app, Action::OpenWidget);

    let Effect::SendMessage { id, text } = update(&mut app, Action::Submit("Hello".into())) else {
        panic!("Expected SendMessage effect");
    };
    let error = client.send_message(&text).await.unwrap_err();
    update(&mut app, Action::RequestFailed { id, error });

    let last = app.messages().last().unwrap();
    assert_eq!(last.direction(), Direction::System);
    assert!(last.text().contains("HTTP 503"), "got {:?}", last.text());
}

#[tokio::test]
async fn test_resolved_endpoint_reaches_mock_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "routed" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();
    let resolved = resolve_with_env(
        &ChatboxConfig::default(),
        &CliOverrides {
            endpoint: Some("/api/chat".into()),
            ..Default::default()
        },
        |key| (key == "CHATBOX_BASE_URL").then(|| uri.clone()),
    );

    let client = HttpMessageClient::from_config(&resolved);
    assert_eq!(client.send_message("Hello").await.unwrap(), "routed");
}
