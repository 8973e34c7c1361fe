//! Typed API error for HTTP handlers.
//!
//! Converts domain errors into HTTP responses with a JSON body and status
//! code. Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use leadengine_service::ServiceError;
use leadengine_storage::StorageError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to a JSON response: `{"detail": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: required field blank.
    BadRequest(String),
    /// 404 Not Found.
    NotFound(String),
    /// 409 Conflict: concurrent writers kept colliding after retries.
    Conflict(String),
    /// 422 Unprocessable Entity: body could not be parsed or a field is missing.
    UnprocessableEntity(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Conflict(msg) => {
                tracing::warn!(reason = %msg, "request conflicted");
                let msg = "request conflicted with a concurrent update, please retry";
                (StatusCode::CONFLICT, msg.to_owned())
            },
            Self::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"detail": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ref e if e.is_conflict() => Self::Conflict(err.to_string()),
            ServiceError::Storage(StorageError::NotFound { entity, key }) => {
                Self::NotFound(format!("{entity} '{key}' not found"))
            },
            _ => Self::Internal(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_bad_request_with_bare_message() {
        let err = ApiError::from(ServiceError::InvalidInput("Name and phone are required.".into()));
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Name and phone are required."));
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = ApiError::from(ServiceError::Conflict("busy".into()));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn delivery_failure_is_internal() {
        let err = ApiError::from(ServiceError::Delivery("smtp down".into()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
