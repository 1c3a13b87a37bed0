use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::FieldError;
use serde::{Deserialize, Serialize};
use service::ServiceError;
use thiserror::Error;
use tracing::{error, info};

/// Single error payload. `code` names the offending field when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
}

/// Multi-field validation failure payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorItem>,
}

impl From<FieldError> for ErrorItem {
    fn from(e: FieldError) -> Self {
        Self { code: Some(e.field), message: e.message }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("invalid payload")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn message_only(status: StatusCode, message: String) -> Response {
        (status, Json(ErrorItem { code: None, message })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => Self::NotFound(msg),
            ServiceError::Validation(errors) => Self::Validation(errors),
            ServiceError::Mapping(msg) => Self::Internal(format!("mapping error: {msg}")),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                info!(error = %msg, "not_found");
                Self::message_only(StatusCode::NOT_FOUND, msg)
            }
            ApiError::Validation(errors) => {
                info!(fields = errors.len(), "validation_failed");
                let body = ErrorResponse { errors: errors.into_iter().map(ErrorItem::from).collect() };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::BadRequest(msg) => {
                info!(error = %msg, "bad_request");
                Self::message_only(StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Internal(msg) => {
                error!(error = %msg, "internal_error");
                Self::message_only(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
