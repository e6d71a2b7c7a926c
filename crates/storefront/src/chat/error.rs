//! Error types for the chat gateway.

use thiserror::Error;

/// Errors that can occur when producing a remote chat reply.
///
/// None of these reach the end user: the route layer catches every variant
/// and substitutes the deterministic fallback reply.
#[derive(Debug, Error)]
pub enum ChatError {
    /// No API credential is configured (basic mode).
    #[error("no API credential configured")]
    NoCredential,

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credential was rejected by the completion endpoint.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Completion endpoint returned an error.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Failed to parse the response body.
    #[error("parse error: {0}")]
    Parse(String),
}

/// API error response from the completion endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorResponse {
    /// Nested error details.
    pub error: ApiError,
}

/// Nested error details.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    /// Error message.
    pub message: String,
    /// Error type.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::NoCredential;
        assert_eq!(err.to_string(), "no API credential configured");

        let err = ChatError::Api {
            status: 429,
            message: "Rate limit reached".to_string(),
        };
        assert_eq!(err.to_string(), "API error (429): Rate limit reached");
    }

    #[test]
    fn test_api_error_deserialization() {
        let json = r#"{
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error"
            }
        }"#;

        let response: ApiErrorResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.error.message, "Incorrect API key provided");
        assert_eq!(
            response.error.error_type.as_deref(),
            Some("invalid_request_error")
        );
    }
}
