use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use contracts::domain::a001_timeline::aggregate::DisasterRecord;
use serde::Deserialize;

use crate::domain::a001_timeline::service;
use crate::shared::error::AppError;
use crate::state::{AppState, SharedState};
use crate::views;

/// GET /
///
/// Loads the timeline through the public API like any other client would.
/// Failures render an empty page instead of an error.
pub async fn index(State(state): State<SharedState>) -> Html<String> {
    let disasters = match fetch_timeline(&state).await {
        Ok(disasters) => disasters,
        Err(e) => {
            tracing::error!("Error fetching data from API: {:#}", e);
            Vec::new()
        }
    };
    Html(views::pages::index(&disasters))
}

async fn fetch_timeline(state: &AppState) -> anyhow::Result<Vec<DisasterRecord>> {
    let url = format!("{}/api/timeline/disaster", state.config.internal_api_base());
    let disasters = state
        .http
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<DisasterRecord>>()
        .await?;
    Ok(disasters)
}

/// GET /year
pub async fn year_landing() -> Html<String> {
    Html(views::pages::year(None, &[]))
}

/// GET /year/:selected_year
pub async fn year(
    State(state): State<SharedState>,
    Path(selected_year): Path<String>,
) -> Result<Html<String>, AppError> {
    let entries = service::disasters_for_year(
        &state.db,
        state.config.reference.catalog(),
        &selected_year,
    )
    .await
    .map_err(AppError::YearLookup)?;
    Ok(Html(views::pages::year(Some(&selected_year), &entries)))
}

#[derive(Debug, Deserialize)]
pub struct YearDisasterParams {
    #[serde(rename = "disasterType")]
    pub disaster_type: Option<String>,
    pub year: Option<String>,
}

/// GET /yearDisaster?disasterType=..&year=..
pub async fn year_disaster(
    State(state): State<SharedState>,
    Query(params): Query<YearDisasterParams>,
) -> Result<Html<String>, AppError> {
    let disaster_type = params.disaster_type.unwrap_or_default();
    let year = params.year.unwrap_or_default();
    let view = service::year_type_detail(
        &state.db,
        state.config.reference.details(),
        &disaster_type,
        &year,
    )
    .await
    .map_err(AppError::DisasterDetails)?;
    Ok(Html(views::pages::year_disaster(&view)))
}

/// Content-only page read from the views directory.
pub async fn static_page(state: &AppState, template: &str) -> Result<Html<String>, AppError> {
    let html = views::render_template(state.config.views.dir(), template)
        .await
        .map_err(AppError::View)?;
    Ok(Html(html))
}
