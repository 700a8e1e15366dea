use axum::{extract::State, Json};
use contracts::usecases::u501_nasa_media::response::{Events, HomeEvents};

use crate::shared::error::AppError;
use crate::state::SharedState;
use crate::usecases::u501_nasa_media::executor;

/// GET /home_events
pub async fn home_events(State(state): State<SharedState>) -> Result<Json<HomeEvents>, AppError> {
    executor::fetch_home_events(&state.svs)
        .await
        .map(Json)
        .map_err(AppError::NasaMedia)
}

/// GET /events
pub async fn events(State(state): State<SharedState>) -> Result<Json<Events>, AppError> {
    executor::fetch_events(&state.svs)
        .await
        .map(Json)
        .map_err(AppError::NasaMedia)
}
