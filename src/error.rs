//! Error types for the registry service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when an address lookup misses.
pub const MSG_ADDRESS_NOT_FOUND: &str = "Адрес не найден";
/// Message returned for routes the service does not serve.
pub const MSG_PAGE_NOT_FOUND: &str = "Страница не найдена";
/// Message returned when a route exists but not for the request method.
pub const MSG_METHOD_NOT_ALLOWED: &str = "Метод не поддерживается";
/// Message returned when a handler fails unexpectedly.
pub const MSG_INTERNAL_ERROR: &str = "Внутренняя ошибка сервера";

/// Failure while reading the registry export.
///
/// Never reaches HTTP clients: the loader logs it and falls back to an empty
/// dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read registry file: {0}")]
    Io(#[from] std::io::Error),

    #[error("registry file is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("malformed registry file: {0}")]
    Csv(#[from] csv::Error),
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// HTTP-facing error: a status code plus an `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: message.into(),
            },
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
