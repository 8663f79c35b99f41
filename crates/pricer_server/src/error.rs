//! API error types and their HTTP mapping

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use pricer_core::types::InvalidDomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced to API callers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body, missing field, wrong type or non-finite number
    #[error("{0}")]
    InvalidRequest(String),

    /// Inputs well-formed but outside the model's domain
    #[error(transparent)]
    InvalidDomain(#[from] InvalidDomainError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidDomain(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request",
            ApiError::InvalidDomain(_) => "invalid_domain",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
