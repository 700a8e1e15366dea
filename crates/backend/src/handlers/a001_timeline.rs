use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use contracts::domain::a001_timeline::aggregate::DisasterRecord;

use crate::domain::a001_timeline::{repository, service};
use crate::shared::error::AppError;
use crate::state::SharedState;

/// Mounted at /api/timeline
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/disaster", get(list_all))
        .route("/disaster/:year", get(list_by_year))
}

/// GET /api/timeline/disaster
pub async fn list_all(
    State(state): State<SharedState>,
) -> Result<Json<Vec<DisasterRecord>>, AppError> {
    repository::list_all(&state.db)
        .await
        .map(Json)
        .map_err(|cause| AppError::Dataset {
            dataset: "timeline",
            cause,
        })
}

/// GET /api/timeline/disaster/:year
pub async fn list_by_year(
    State(state): State<SharedState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<DisasterRecord>>, AppError> {
    let Some(year) = service::parse_year(&year) else {
        return Ok(Json(Vec::new()));
    };
    repository::find_by_start_year(&state.db, year)
        .await
        .map(Json)
        .map_err(|cause| AppError::Dataset {
            dataset: "timeline",
            cause,
        })
}
