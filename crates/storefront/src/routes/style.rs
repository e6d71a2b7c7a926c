//! Style quiz route handler.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

use crate::services::style::{self, QuizAnswers, StyleProfile};

/// Profile returned for a completed quiz.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: StyleProfile,
}

/// Resolve a completed style quiz to a profile.
#[instrument(skip(payload))]
pub async fn profile(Json(payload): Json<QuizAnswers>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        profile: style::determine_profile(&payload),
    })
}
