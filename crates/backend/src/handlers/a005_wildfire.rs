use axum::{extract::State, routing::get, Json, Router};
use contracts::domain::a005_wildfire::aggregate::WildfireRecord;

use crate::domain::a005_wildfire::repository;
use crate::shared::error::AppError;
use crate::state::SharedState;

/// Mounted at /api/wildfires
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(list_all))
}

/// GET /api/wildfires
pub async fn list_all(State(state): State<SharedState>) -> Result<Json<Vec<WildfireRecord>>, AppError> {
    repository::list_all(&state.db)
        .await
        .map(Json)
        .map_err(|cause| AppError::Dataset {
            dataset: "wildfire data",
            cause,
        })
}
