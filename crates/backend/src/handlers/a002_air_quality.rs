use axum::{extract::State, routing::get, Json, Router};
use contracts::domain::a002_air_quality::aggregate::AirQualityReading;

use crate::domain::a002_air_quality::repository;
use crate::shared::error::AppError;
use crate::state::SharedState;

/// Mounted at /api/airquality
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(list_all))
}

/// GET /api/airquality
pub async fn list_all(State(state): State<SharedState>) -> Result<Json<Vec<AirQualityReading>>, AppError> {
    repository::list_all(&state.db)
        .await
        .map(Json)
        .map_err(|cause| AppError::Dataset {
            dataset: "air quality data",
            cause,
        })
}
