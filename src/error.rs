//! Application error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Required configuration is absent or malformed. Fatal to the whole run.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The data provider answered a single query with a non-success status.
    #[error("Provider error: {message}")]
    Provider { status: u16, message: String },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn is_config(&self) -> bool {
        matches!(self, AppError::Config(_))
    }

    /// HTTP status this error should surface as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Provider { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            AppError::Http(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Internal(_) | AppError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Provider { message, .. } => message.clone(),
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
