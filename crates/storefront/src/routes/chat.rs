//! Chatbot route handlers.
//!
//! `/message` never fails: the gateway falls back to the canned reply table
//! on any upstream problem, so clients always get a usable reply.

use axum::{Json, extract::State};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::instrument;

use vitrina_core::Language;

use crate::chat::{ChatMessage, ChatReply};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Chat message payload: the user's text plus recent conversation turns.
#[derive(Debug, Deserialize)]
pub struct MessagePayload {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// Credential payload.
#[derive(Debug, Deserialize)]
pub struct CredentialPayload {
    pub api_key: String,
}

/// Language selection payload.
#[derive(Debug, Deserialize)]
pub struct LanguagePayload {
    pub language: Language,
}

/// Gateway status returned to clients.
#[derive(Debug, Serialize)]
pub struct ChatStatus {
    pub has_credential: bool,
    pub language: Language,
}

/// Send a message and get a reply with suggestion chips.
#[instrument(skip(state, payload))]
pub async fn message(
    State(state): State<AppState>,
    Json(payload): Json<MessagePayload>,
) -> Json<ChatReply> {
    Json(state.chat().reply(&payload.message, &payload.history).await)
}

/// Set the completion API credential, leaving basic mode.
#[instrument(skip(state, payload))]
pub async fn credential(
    State(state): State<AppState>,
    Json(payload): Json<CredentialPayload>,
) -> Result<Json<Value>> {
    state
        .chat()
        .set_credential(SecretString::from(payload.api_key))
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(Json(json!({ "has_credential": true })))
}

/// Select the reply language for this session.
#[instrument(skip(state))]
pub async fn language(
    State(state): State<AppState>,
    Json(payload): Json<LanguagePayload>,
) -> Json<Value> {
    state.chat().set_language(payload.language);
    Json(json!({ "language": state.chat().language() }))
}

/// Report whether the gateway is in basic mode and the selected language.
#[instrument(skip(state))]
pub async fn status(State(state): State<AppState>) -> Json<ChatStatus> {
    Json(ChatStatus {
        has_credential: state.chat().has_credential(),
        language: state.chat().language(),
    })
}
