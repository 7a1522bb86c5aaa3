/// LLM Client: the single point of entry for all chat-completion calls in Pitchwise.
///
/// ARCHITECTURAL RULE: No other module may call the model provider directly.
/// Drafting and sentiment both go through this module.
///
/// Speaks the OpenAI-compatible chat completions protocol (Groq by default).
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// 429, 5xx and transport failures are worth another attempt.
    fn is_retryable(&self) -> bool {
        match self {
            LlmError::Http(_) => true,
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// One chat completion: a system instruction plus a single user turn.
#[derive(Debug, Clone)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl LlmResponse {
    /// Text content of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// The single LLM client used by all services in Pitchwise.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
            api_key,
        })
    }

    /// Makes exactly one request. No retry; callers that must not multiply
    /// outbound traffic (sentiment) use this.
    pub async fn call_once(&self, request: &ChatRequest<'_>) -> Result<LlmResponse, LlmError> {
        let body = CompletionBody {
            model: request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let llm_response: LlmResponse = serde_json::from_slice(&bytes)?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                request.model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(llm_response)
    }

    /// Calls the model, retrying on 429, 5xx and transport errors with
    /// exponential backoff (1s, 2s).
    pub async fn call(&self, request: &ChatRequest<'_>) -> Result<LlmResponse, LlmError> {
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            match self.call_once(request).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() => {
                    warn!("LLM call failed: {e}");
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Like `call`, but returns the trimmed text of the first choice and
    /// treats a blank answer as an error.
    pub async fn call_text(&self, request: &ChatRequest<'_>) -> Result<String, LlmError> {
        let response = self.call(request).await?;
        response
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::new(
            "test-key".to_string(),
            format!("{}/v1/chat/completions", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn request() -> ChatRequest<'static> {
        ChatRequest {
            model: "llama-3.1-8b-instant",
            system: "You are terse.",
            prompt: "Say hi",
            temperature: 0.0,
            max_tokens: 5,
        }
    }

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "choices": [{"message": {"role": "assistant", "content": content}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 1}
        })
    }

    #[test]
    fn test_response_text_reads_first_choice() {
        let response: LlmResponse = serde_json::from_value(completion("Positive")).unwrap();
        assert_eq!(response.text(), Some("Positive"));
    }

    #[test]
    fn test_response_without_choices_has_no_text() {
        let response: LlmResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(LlmError::Api { status: 429, message: String::new() }.is_retryable());
        assert!(LlmError::Api { status: 503, message: String::new() }.is_retryable());
        assert!(!LlmError::Api { status: 401, message: String::new() }.is_retryable());
        assert!(!LlmError::EmptyContent.is_retryable());
    }

    #[tokio::test]
    async fn test_call_once_sends_bearer_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "llama-3.1-8b-instant",
                "temperature": 0.0,
                "messages": [
                    {"role": "system", "content": "You are terse."},
                    {"role": "user", "content": "Say hi"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("hi")))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).call_once(&request()).await.unwrap();
        assert_eq!(response.text(), Some("hi"));
    }

    #[tokio::test]
    async fn test_call_once_surfaces_provider_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"error": {"message": "Invalid API Key"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).call_once(&request()).await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API Key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_call_once_does_not_retry_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).call_once(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_call_once_rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).call_once(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }

    #[tokio::test]
    async fn test_call_text_rejects_blank_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("   ")))
            .mount(&server)
            .await;

        let err = client_for(&server).call_text(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_call_does_not_retry_client_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).call(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 400, .. }));
    }
}
