use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Uniform error shape for the wire: `{"code": <status>, "errors": <msg>}`.
#[derive(Debug)]
pub enum AppError {
    /// The requested flight does not exist.
    FlightNotFound,
    /// The data-access layer could not be reached or a query failed.
    DataAccess(String),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::FlightNotFound => {
                (StatusCode::NOT_FOUND, "flight not found".to_string())
            }
            AppError::DataAccess(diag) => {
                tracing::error!("Data access failure: {}", diag);
                (
                    StatusCode::BAD_REQUEST,
                    format!("could not connect to db: {}", diag),
                )
            }
            AppError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "code": status.as_u16(),
            "errors": message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Internal(err.into())
    }
}
