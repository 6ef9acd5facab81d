use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Body of the 200 answer when the collection is empty.
pub const NO_DATA_MESSAGE: &str = "No data found";

/// Every `costo-materia` handler fails through this type, so all operations share one
/// status mapping:
/// - `NoData` -> 200 with [`NO_DATA_MESSAGE`]
/// - `BadRequest` -> 400 with the message as plain text
/// - `Unexpected` -> 500 with a generic JSON body; the cause is only logged
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", NO_DATA_MESSAGE)]
    NoData,
    #[error("{0}")]
    BadRequest(String),
    #[error("unexpected failure")]
    Unexpected(#[source] ServiceError),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NoData => Self::NoData,
            ServiceError::Invalid(msg) => Self::BadRequest(msg),
            other => Self::Unexpected(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NoData => {
                warn!("no material cost data");
                (StatusCode::OK, NO_DATA_MESSAGE).into_response()
            }
            ApiError::BadRequest(msg) => {
                warn!(reason = %msg, "material cost request rejected");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Unexpected(cause) => {
                error!(error = %cause, debug = ?cause, "material cost operation failed");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (status, Json(serde_json::json!({"error": "Internal Server Error"}))).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
