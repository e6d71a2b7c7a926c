//! HTTP client for the chat completions endpoint.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use super::error::{ApiErrorResponse, ChatError};
use super::types::{ChatMessage, CompletionRequest, CompletionResponse};

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Fixed decoding parameters: bounded output, moderate randomness, light
/// repetition penalties.
const MAX_TOKENS: u32 = 200;
const TEMPERATURE: f32 = 0.7;
const PRESENCE_PENALTY: f32 = 0.1;
const FREQUENCY_PENALTY: f32 = 0.1;

/// Fallback text used when the endpoint returns an empty completion.
const EMPTY_COMPLETION_TEXT: &str = "Sorry, I could not process your request.";

/// Client for the chat completions endpoint.
///
/// Cheaply cloneable; the bearer credential is baked into the underlying
/// HTTP client's default headers, so the gateway rebuilds the client when
/// the credential changes.
#[derive(Clone)]
pub struct CompletionClient {
    inner: Arc<CompletionClientInner>,
}

struct CompletionClientInner {
    client: reqwest::Client,
    model: String,
}

impl CompletionClient {
    /// Create a new completion client.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Parse` if the credential contains characters that
    /// are invalid in an HTTP header.
    pub fn new(credential: &SecretString, model: String) -> Result<Self, ChatError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let bearer = format!("Bearer {}", credential.expose_secret());
        let mut auth_value = HeaderValue::from_str(&bearer)
            .map_err(|e| ChatError::Parse(format!("invalid credential for header: {e}")))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(CompletionClientInner { client, model }),
        })
    }

    /// Send a bounded message list and return the model's reply text.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Unauthorized` on a 401 status, `ChatError::Api`
    /// on any other non-2xx status, and `ChatError::Http`/`ChatError::Parse`
    /// on transport or body failures.
    #[instrument(skip(self, messages), fields(model = %self.inner.model))]
    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ChatError> {
        let request = CompletionRequest {
            model: self.inner.model.clone(),
            messages,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            presence_penalty: PRESENCE_PENALTY,
            frequency_penalty: FREQUENCY_PENALTY,
        };

        let response = self
            .inner
            .client
            .post(COMPLETIONS_URL)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_status(status, response).await);
        }

        let body = response.text().await?;
        let completion: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ChatError::Parse(format!("failed to parse response: {e}")))?;

        Ok(completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_else(|| EMPTY_COMPLETION_TEXT.to_string()))
    }

    /// Handle an error status code.
    async fn handle_error_status(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ChatError {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return ChatError::Unauthorized("invalid API credential".to_string());
        }

        match response.text().await {
            Ok(body) => {
                let message = serde_json::from_str::<ApiErrorResponse>(&body)
                    .map_or(body, |api_error| api_error.error.message);
                ChatError::Api {
                    status: status.as_u16(),
                    message,
                }
            }
            Err(e) => ChatError::Http(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CompletionClient {
        let credential = SecretString::from("sk-test");
        CompletionClient::new(&credential, "gpt-4.1-2025-04-14".to_string()).expect("client")
    }

    #[test]
    fn test_client_is_clone_send_sync() {
        fn assert_clone<T: Clone>() {}
        fn assert_send_sync<T: Send + Sync>() {}
        assert_clone::<CompletionClient>();
        assert_send_sync::<CompletionClient>();
        let _ = client();
    }

    #[test]
    fn test_rejects_credential_with_invalid_header_chars() {
        let credential = SecretString::from("bad\nkey");
        let result = CompletionClient::new(&credential, "model".to_string());
        assert!(matches!(result, Err(ChatError::Parse(_))));
    }
}
