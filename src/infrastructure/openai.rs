//! Chat-completion client for OpenAI-compatible APIs

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::application::ports::outbound::{
    ChatMessage, LlmError, LlmPort, LlmRequest, LlmResponse, ResponseFormat,
};

/// Client for the `/chat/completions` endpoint
///
/// No timeout is configured: a call waits until the server answers or the
/// connection fails.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl LlmPort for OpenAiClient {
    async fn generate(&self, api_key: &str, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: request.wire_messages(),
            response_format: match request.response_format {
                ResponseFormat::JsonObject => Some(WireResponseFormat {
                    r#type: "json_object",
                }),
                ResponseFormat::Text => None,
            },
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %error_text, "Chat completion rejected");
            return Err(LlmError::Status(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;
        let completion: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::MalformedResponse(format!("invalid response body: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::MalformedResponse("response has no message content".to_string()))?;

        Ok(LlmResponse {
            content: content.trim().to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<WireResponseFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct WireResponseFormat {
    r#type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
        Router,
    };
    use serde_json::Value;

    use crate::application::services::fallback_resolver::tests::FixedPick;
    use crate::application::services::{ConversionService, FallbackResolver};
    use crate::domain::services::{ABSTRACT_EMOJIS, FALLBACK_ROOM_NAMES};
    use crate::domain::value_objects::ApiCredential;

    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    #[derive(Clone)]
    struct MockApi {
        status: StatusCode,
        body: &'static str,
        seen: Seen,
    }

    async fn chat_completions(
        State(api): State<MockApi>,
        headers: HeaderMap,
        body: String,
    ) -> (StatusCode, String) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let json = serde_json::from_str(&body).unwrap_or(Value::Null);
        api.seen.lock().unwrap().push((auth, json));
        (api.status, api.body.to_string())
    }

    /// Serve a canned reply on an ephemeral port; returns the base URL
    async fn spawn_api(status: StatusCode, body: &'static str) -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/v1/chat/completions", post(chat_completions))
            .with_state(MockApi {
                status,
                body,
                seen: seen.clone(),
            });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/v1/", addr), seen)
    }

    fn emoji_request() -> LlmRequest {
        LlmRequest::new(vec![ChatMessage::user("peach")])
            .with_system_prompt("You are an emoji translator.")
            .with_temperature(0.7)
            .with_max_tokens(Some(50))
            .with_response_format(ResponseFormat::JsonObject)
    }

    const PEACH_REPLY: &str =
        r#"{"choices":[{"message":{"role":"assistant","content":" {\"emojis\": [\"🍑\"]} "}}]}"#;

    #[tokio::test]
    async fn test_sends_openai_request_shape() {
        let (base_url, seen) = spawn_api(StatusCode::OK, PEACH_REPLY).await;
        let client = OpenAiClient::new(&base_url, "gpt-4o-mini");

        let response = client.generate("sk-test", emoji_request()).await.unwrap();
        assert_eq!(response.content, r#"{"emojis": ["🍑"]}"#);

        let seen = seen.lock().unwrap();
        let (auth, body) = &seen[0];
        assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "peach");
        assert_eq!(body["response_format"]["type"], "json_object");
        assert_eq!(body["max_tokens"], 50);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_error_status() {
        let (base_url, _) = spawn_api(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
        let client = OpenAiClient::new(&base_url, "gpt-4o-mini");

        let err = client.generate("sk-test", emoji_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Status(500)));
    }

    #[tokio::test]
    async fn test_malformed_bodies() {
        for body in ["<html>oops</html>", r#"{"choices": []}"#, r#"{"choices":[{"message":{}}]}"#] {
            let (base_url, _) = spawn_api(StatusCode::OK, body).await;
            let client = OpenAiClient::new(&base_url, "gpt-4o-mini");

            let err = client.generate("sk-test", emoji_request()).await.unwrap_err();
            assert!(matches!(err, LlmError::MalformedResponse(_)), "body {:?}", body);
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = OpenAiClient::new(&format!("http://{}", addr), "gpt-4o-mini");
        let err = client.generate("sk-test", emoji_request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
    }

    fn conversion(base_url: &str, pick: usize) -> ConversionService<OpenAiClient> {
        ConversionService::new(
            Arc::new(OpenAiClient::new(base_url, "gpt-4o-mini")),
            ApiCredential::Present("sk-test".to_string()),
            FallbackResolver::new(Arc::new(FixedPick(pick))),
        )
    }

    #[tokio::test]
    async fn test_conversion_over_http() {
        let (base_url, _) = spawn_api(
            StatusCode::OK,
            r#"{"choices":[{"message":{"content":"{\"emojis\": [\"🍰\", \"🍵\"]}"}}]}"#,
        )
        .await;
        assert_eq!(conversion(&base_url, 0).convert_to_emoji("green tea cake").await, "🍰🍵");
    }

    #[tokio::test]
    async fn test_conversion_falls_back_on_http_error() {
        let (base_url, seen) = spawn_api(StatusCode::UNAUTHORIZED, "{}").await;
        let service = conversion(&base_url, 4);

        let emoji = service.convert_to_emoji("고양이").await;
        assert!(ABSTRACT_EMOJIS.contains(&emoji.as_str()));

        let name = service.suggest_room_name(&[]).await;
        assert!(FALLBACK_ROOM_NAMES.contains(&name.as_str()));
        assert_eq!(seen.lock().unwrap().len(), 2);
    }
}
