//! The recommendation endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use recommender::Recommendation;

use crate::error::ApiError;
use crate::AppState;

/// Body of `POST /recommend`.
///
/// Deserialization is the validation: anything that is not an object with
/// an integer array under `bourbonIds` is rejected before scoring starts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub bourbon_ids: Vec<i64>,
}

/// POST /recommend
///
/// Returns distilleries ranked by the configured strategy.
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<Vec<Recommendation>>, ApiError> {
    let Json(request) = payload?;
    info!(
        "Recommend endpoint hit with {} bourbon ids",
        request.bourbon_ids.len()
    );

    let recommendations = state
        .orchestrator
        .get_recommendations(request.bourbon_ids)
        .await?;

    Ok(Json(recommendations))
}
