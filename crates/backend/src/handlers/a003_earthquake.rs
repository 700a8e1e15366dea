use axum::{extract::State, routing::get, Json, Router};
use contracts::domain::a003_earthquake::aggregate::EarthquakeEvent;

use crate::domain::a003_earthquake::repository;
use crate::shared::error::AppError;
use crate::state::SharedState;

/// Mounted at /api/earthquake
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(list_all))
}

/// GET /api/earthquake
pub async fn list_all(State(state): State<SharedState>) -> Result<Json<Vec<EarthquakeEvent>>, AppError> {
    repository::list_all(&state.db)
        .await
        .map(Json)
        .map_err(|cause| AppError::Dataset {
            dataset: "earthquake data",
            cause,
        })
}
