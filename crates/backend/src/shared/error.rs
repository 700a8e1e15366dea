use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure surfaced by an HTTP handler.
///
/// The cause is logged when the error is turned into a response; clients only
/// ever see the generic message.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error fetching disasters")]
    YearLookup(anyhow::Error),

    #[error("Error fetching disaster details")]
    DisasterDetails(anyhow::Error),

    #[error("Error fetching data from NASA API")]
    NasaMedia(anyhow::Error),

    #[error("Error fetching {dataset}")]
    Dataset {
        dataset: &'static str,
        cause: anyhow::Error,
    },

    #[error("Error rendering page")]
    View(anyhow::Error),
}

impl AppError {
    fn cause(&self) -> &anyhow::Error {
        match self {
            AppError::YearLookup(e)
            | AppError::DisasterDetails(e)
            | AppError::NasaMedia(e)
            | AppError::View(e) => e,
            AppError::Dataset { cause, .. } => cause,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}: {:#}", self, self.cause());

        let message = self.to_string();
        match self {
            AppError::YearLookup(_) | AppError::DisasterDetails(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
            AppError::NasaMedia(_) | AppError::Dataset { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": message })),
            )
                .into_response(),
            AppError::View(_) => (StatusCode::INTERNAL_SERVER_ERROR, message).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_stay_generic() {
        let err = AppError::Dataset {
            dataset: "earthquakes",
            cause: anyhow::anyhow!("no such table: earthquake"),
        };
        assert_eq!(err.to_string(), "Error fetching earthquakes");

        let err = AppError::YearLookup(anyhow::anyhow!("expected value at line 1"));
        assert_eq!(err.to_string(), "Error fetching disasters");
    }

    #[test]
    fn test_responses_are_internal_errors() {
        let response = AppError::NasaMedia(anyhow::anyhow!("timeout")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::View(anyhow::anyhow!("missing template")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
