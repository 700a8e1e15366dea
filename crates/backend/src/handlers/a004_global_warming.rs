use axum::{extract::State, routing::get, Json, Router};
use contracts::domain::a004_global_warming::aggregate::GlobalWarmingRecord;

use crate::domain::a004_global_warming::repository;
use crate::shared::error::AppError;
use crate::state::SharedState;

/// Mounted at /api/globalwarming
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(list_all))
}

/// GET /api/globalwarming
pub async fn list_all(State(state): State<SharedState>) -> Result<Json<Vec<GlobalWarmingRecord>>, AppError> {
    repository::list_all(&state.db)
        .await
        .map(Json)
        .map_err(|cause| AppError::Dataset {
            dataset: "global warming data",
            cause,
        })
}
