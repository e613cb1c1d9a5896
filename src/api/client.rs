use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::i18n::Language;

/// Hosted chat function the page talks to unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str =
    "https://functions.poehali.dev/e66d0768-3a94-43d6-a840-7a739e7033ad";

/// Upper bound for one request, connection included.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Body of the outbound POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub language: Language,
}

/// Body of a response from the endpoint.
///
/// Every field is optional: a body without `response` is still a valid
/// reply, just one without content. `request_id` and `error` are diagnostic
/// only and accepted with any JSON type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReplyBody {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub request_id: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl ChatReplyBody {
    /// Returns the reply text, treating an empty string as absent.
    pub fn reply_text(&self) -> Option<&str> {
        self.response.as_deref().filter(|text| !text.is_empty())
    }

    /// Returns the error detail as plain text.
    pub fn error_text(&self) -> Option<String> {
        self.error.as_ref().map(|error| match error {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
    }
}

pub struct AssistantClient {
    client: Client,
    endpoint: String,
}

impl AssistantClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// Posts one message and parses the JSON reply.
    ///
    /// Any failure to obtain a parseable body, including a non-success
    /// status, is returned as an error.
    pub async fn send(&self, request: &ChatRequest) -> Result<ChatReplyBody> {
        tracing::debug!(endpoint = %self.endpoint, language = %request.language, "sending chat request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ChatReplyBody>(&body)
                .ok()
                .and_then(|b| b.error_text())
                .unwrap_or(body);
            anyhow::bail!("API request failed with status {status}: {detail}");
        }

        let body: ChatReplyBody = response
            .json()
            .await
            .context("Failed to parse API response")?;

        if let Some(request_id) = &body.request_id {
            tracing::debug!(%request_id, "chat request settled");
        }

        Ok(body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::Server) -> AssistantClient {
        AssistantClient::new(format!("{}/chat", server.url()), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_request_serializes_language_code() {
        let request = ChatRequest {
            message: "Hello".to_string(),
            language: Language::En,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Hello", "language": "en"}));
    }

    #[test]
    fn test_reply_text_treats_empty_as_absent() {
        let empty: ChatReplyBody = serde_json::from_str(r#"{"response": ""}"#).unwrap();
        assert!(empty.reply_text().is_none());

        let missing: ChatReplyBody = serde_json::from_str("{}").unwrap();
        assert!(missing.reply_text().is_none());

        let present: ChatReplyBody =
            serde_json::from_str(r#"{"response": "Hi", "request_id": "abc"}"#).unwrap();
        assert_eq!(present.reply_text(), Some("Hi"));
        assert_eq!(present.request_id, Some(Value::from("abc")));
    }

    #[test]
    fn test_diagnostic_fields_accept_any_type() {
        let body: ChatReplyBody =
            serde_json::from_str(r#"{"response": "Hi", "request_id": 42, "error": {"code": 7}}"#)
                .unwrap();
        assert_eq!(body.reply_text(), Some("Hi"));
        assert_eq!(body.request_id, Some(Value::from(42)));
        assert_eq!(body.error_text().as_deref(), Some(r#"{"code":7}"#));

        let plain: ChatReplyBody = serde_json::from_str(r#"{"error": "bad key"}"#).unwrap();
        assert_eq!(plain.error_text().as_deref(), Some("bad key"));
    }

    #[tokio::test]
    async fn test_send_posts_json_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "message": "Привет",
                "language": "ru"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"response": "Здравствуйте", "request_id": "req-1"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let body = client
            .send(&ChatRequest {
                message: "Привет".to_string(),
                language: Language::Ru,
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body.reply_text(), Some("Здравствуйте"));
    }

    #[tokio::test]
    async fn test_send_non_success_status_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "OpenAI API key not configured"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .send(&ChatRequest {
                message: "hi".to_string(),
                language: Language::En,
            })
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("API key not configured"));
    }

    #[tokio::test]
    async fn test_send_malformed_json_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = client_for(&server);
        let result = client
            .send(&ChatRequest {
                message: "hi".to_string(),
                language: Language::En,
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_send_unreachable_endpoint_is_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let client =
            AssistantClient::new("http://127.0.0.1:9/chat".to_string(), Duration::from_secs(2))
                .unwrap();
        let err = client
            .send(&ChatRequest {
                message: "hi".to_string(),
                language: Language::En,
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to connect"));
    }
}
