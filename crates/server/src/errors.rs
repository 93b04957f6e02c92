use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// Error returned by handlers; rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        if status.is_server_error() {
            error!(%status, error = %msg, "request failed");
        }
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(m) | ServiceError::Model(ModelError::Validation(m)) => ApiError::BadRequest(m),
            ServiceError::NotFound(m) => ApiError::NotFound(m),
            ServiceError::Db(m) | ServiceError::Model(ModelError::Db(m)) => ApiError::Internal(m),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let cases = [
            (ServiceError::Validation("Name is required".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Model(ModelError::Validation("too long".into())), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("Item"), StatusCode::NOT_FOUND),
            (ServiceError::Db("disk I/O error".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Model(ModelError::Db("locked".into())), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn not_found_message_is_preserved() {
        let api: ApiError = ServiceError::not_found("Item").into();
        assert_eq!(api.to_string(), "Item not found");
    }
}
