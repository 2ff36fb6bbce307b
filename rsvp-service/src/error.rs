use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use wedding_rsvp_shared::error::{ConfigError, ServiceError, ValidationError};
use wedding_rsvp_shared::models::FieldName;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    #[error("Transport error: {cause}")]
    Transport { message: String, cause: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(err) => AppError::Validation(err),
            ServiceError::Transport { message, cause } => AppError::Transport { message, cause },
            ServiceError::Config(err) => AppError::Config(err),
            ServiceError::InternalError(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                tracing::warn!("Validation error: {}", err);
                let missing: Vec<&str> = err.missing.iter().map(FieldName::as_str).collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": err.message, "missing": missing })),
                )
                    .into_response()
            }
            AppError::Transport { message, cause } => {
                tracing::error!("Form relay transport error: {}", cause);
                (StatusCode::BAD_GATEWAY, Json(json!({ "error": message }))).into_response()
            }
            AppError::UnsupportedMediaType(content_type) => {
                tracing::warn!("Unsupported content type: {}", content_type);
                (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    Json(json!({
                        "error": format!("Unsupported content type: {}", content_type)
                    })),
                )
                    .into_response()
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request error: {}", msg);
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Config(err) => {
                tracing::error!("Configuration error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
