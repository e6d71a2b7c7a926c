//! Auth route handlers.
//!
//! Authentication is simulated: login and register construct a user from the
//! submitted fields without verifying anything. The store mirrors the user
//! to durable storage while present and drops it on logout.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use vitrina_core::UserId;

use crate::models::{AuthMode, User};
use crate::state::AppState;

/// Login payload. The password is accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// Register payload. The password is accepted and ignored.
#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// Auth modal payload. Omitting `mode` keeps the previous mode.
#[derive(Debug, Deserialize)]
pub struct AuthModalPayload {
    pub is_open: bool,
    #[serde(default)]
    pub mode: Option<AuthMode>,
}

fn simulated_user_id() -> UserId {
    // The original client used the wall-clock for simulated IDs; seconds
    // keep that property within i32 range.
    UserId::new(i32::try_from(Utc::now().timestamp()).unwrap_or(i32::MAX))
}

/// Current user, if logged in.
#[instrument(skip(state))]
pub async fn me(State(state): State<AppState>) -> Json<Option<User>> {
    Json(state.store().user())
}

/// Simulated login.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Json<User> {
    let user = User {
        id: simulated_user_id(),
        name: "John Doe".to_string(),
        email: payload.email,
    };
    state.store().set_user(Some(user.clone()));
    state.store().set_auth_modal(false, None);
    Json(user)
}

/// Simulated registration.
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Json<User> {
    let user = User {
        id: simulated_user_id(),
        name: payload.name,
        email: payload.email,
    };
    state.store().set_user(Some(user.clone()));
    state.store().set_auth_modal(false, None);
    Json(user)
}

/// Log out, destroying the current user.
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Json<Value> {
    state.store().set_user(None);
    Json(json!({ "ok": true }))
}

/// Set auth-modal visibility and mode.
#[instrument(skip(state))]
pub async fn modal(
    State(state): State<AppState>,
    Json(payload): Json<AuthModalPayload>,
) -> Json<Value> {
    state.store().set_auth_modal(payload.is_open, payload.mode);
    let (is_open, mode) = state.store().auth_modal();
    Json(json!({ "is_open": is_open, "mode": mode }))
}
