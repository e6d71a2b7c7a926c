//! Size recommendation route handler.

use axum::Json;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::sizing::{self, Measurements, SizeRecommendation};

/// Compute a size recommendation from submitted measurements.
#[instrument(skip(payload))]
pub async fn recommendation(
    Json(payload): Json<Measurements>,
) -> Result<Json<SizeRecommendation>> {
    sizing::recommend(&payload)
        .map(Json)
        .map_err(|e| AppError::BadRequest(e.to_string()))
}
