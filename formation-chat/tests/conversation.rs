//! Conversation behaviour against a scripted client and against a mock
//! completions server.

use std::sync::Mutex;

use async_trait::async_trait;
use formation_chat::{
    APOLOGY, ChatClient, ChatError, ChatMessage, ChatSettings, Conversation, DeepSeekClient,
    GREETING, Role, SendOutcome,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Replies from a fixed script and records every history it was sent.
struct ScriptedClient {
    replies: Mutex<Vec<Result<String, ChatError>>>,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedClient {
    fn new(replies: Vec<Result<String, ChatError>>) -> Self {
        Self {
            replies: Mutex::new(replies),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChatClient for ScriptedClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
    ) -> Result<String, ChatError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        self.replies.lock().unwrap().remove(0)
    }
}

#[tokio::test]
async fn conversation_starts_with_greeting() {
    let conversation = Conversation::new(ScriptedClient::new(vec![]));

    assert_eq!(conversation.messages(), &[ChatMessage::assistant(GREETING)]);
}

#[tokio::test]
async fn blank_input_is_ignored() {
    let mut conversation = Conversation::new(ScriptedClient::new(vec![]));

    let outcome = conversation.send("   ").await;

    assert!(matches!(outcome, SendOutcome::Ignored));
    assert_eq!(conversation.messages().len(), 1);
    assert!(conversation.client().seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn reply_is_appended_and_full_history_sent() {
    let client = ScriptedClient::new(vec![
        Ok("Wyoming is popular.".to_string()),
        Ok("It costs $847.".to_string()),
    ]);
    let mut conversation = Conversation::new(client);

    conversation.send("Which state?").await;
    let outcome = conversation.send("How much?").await;

    assert!(matches!(outcome, SendOutcome::Replied(ref r) if r == "It costs $847."));
    let roles: Vec<Role> = conversation.messages().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            Role::Assistant,
            Role::User,
            Role::Assistant,
            Role::User,
            Role::Assistant
        ]
    );

    let seen = conversation.client().seen.lock().unwrap();
    assert_eq!(seen[1].len(), 4);
    assert_eq!(seen[1][3], ChatMessage::user("How much?"));
}

#[tokio::test]
async fn failure_appends_apology() {
    let client = ScriptedClient::new(vec![Err(ChatError::Timeout)]);
    let mut conversation = Conversation::new(client);

    let outcome = conversation.send("Hello?").await;

    assert!(matches!(outcome, SendOutcome::Failed(ChatError::Timeout)));
    assert_eq!(
        conversation.messages().last(),
        Some(&ChatMessage::assistant(APOLOGY))
    );
}

// ── DeepSeekClient over HTTP ────────────────────────────────────────────

fn client_for(server: &MockServer) -> DeepSeekClient {
    DeepSeekClient::new(ChatSettings {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn deepseek_client_returns_first_choice() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(bearer_token("test-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "deepseek-chat",
            "max_tokens": 2000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cmpl-1",
            "choices": [
                {"message": {"role": "assistant", "content": "Hi there"}, "finish_reason": "stop"}
            ]
        })))
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .complete(&[ChatMessage::user("Hi")])
        .await
        .unwrap();

    assert_eq!(reply, "Hi there");
}

#[tokio::test]
async fn deepseek_client_maps_http_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let result = client_for(&server).complete(&[ChatMessage::user("Hi")]).await;

    assert!(matches!(result, Err(ChatError::Http(401, ref body)) if body == "bad key"));
}

#[tokio::test]
async fn deepseek_client_rejects_empty_choices() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "x", "choices": []})),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).complete(&[ChatMessage::user("Hi")]).await;

    assert!(matches!(result, Err(ChatError::EmptyResponse)));
}

#[tokio::test]
async fn deepseek_client_lists_models() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "object": "list",
            "data": [{"id": "deepseek-chat"}, {"id": "deepseek-reasoner"}]
        })))
        .mount(&server)
        .await;

    let models = client_for(&server).list_models().await.unwrap();

    assert_eq!(models, vec!["deepseek-chat", "deepseek-reasoner"]);
}

#[tokio::test]
async fn conversation_over_http_records_apology_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut conversation = Conversation::new(client_for(&server));
    let outcome = conversation.send("Anyone there?").await;

    assert!(matches!(outcome, SendOutcome::Failed(ChatError::Http(500, _))));
    assert_eq!(conversation.messages().last().unwrap().content, APOLOGY);
}
