/// Server error types
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use snapfeed_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Key of the message field in every error body
pub const ERROR_FIELD: &str = "Error message";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<snapfeed_storage::StorageError> for ServerError {
    fn from(err: snapfeed_storage::StorageError) -> Self {
        ServerError::Core(err.into())
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Core(CoreError::InvalidInput(_)) | ServerError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Core(CoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ServerError::Core(CoreError::Conflict(_)) => StatusCode::CONFLICT,
            ServerError::Core(CoreError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            ServerError::Core(CoreError::Store(_) | CoreError::Serialization(_))
            | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, "Request failed: {}", self);
        } else {
            tracing::debug!(%status, "Request rejected: {}", self);
        }

        let mut body = Map::new();
        body.insert(ERROR_FIELD.to_string(), Value::String(self.to_string()));

        (status, Json(body)).into_response()
    }
}
