//! Rewards route handler.

use axum::{Json, extract::Query};
use serde::Deserialize;
use tracing::instrument;

use crate::services::rewards::{self, RewardsStatus};

/// Rewards status query.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub points: u32,
}

/// Classify a points balance into a membership tier with progress.
#[instrument]
pub async fn status(Query(query): Query<StatusQuery>) -> Json<RewardsStatus> {
    Json(rewards::status(query.points))
}
