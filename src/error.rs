//! Error types for the bookshelf core

use serde::Serialize;
use thiserror::Error;

use crate::repository::StoreError;

/// Stable error codes handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    BadValue = 2,
    NoSuchData = 3,
    Duplicate = 4,
    InvalidCredentials = 5,
    Forbidden = 6,
    InvalidToken = 7,
    StoreFailure = 8,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Deliberately carries no detail so unknown accounts and bad passwords
    /// cannot be told apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token signing failed: {0}")]
    SigningFailed(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::NotFound(_) => ErrorCode::NoSuchData,
            AppError::AlreadyExists(_) => ErrorCode::Duplicate,
            AppError::InvalidCredentials => ErrorCode::InvalidCredentials,
            AppError::Forbidden(_) => ErrorCode::Forbidden,
            AppError::InvalidToken(_) => ErrorCode::InvalidToken,
            AppError::Store(_) => ErrorCode::StoreFailure,
            AppError::HashingFailed(_)
            | AppError::SigningFailed(_)
            | AppError::Config(_)
            | AppError::Internal(_) => ErrorCode::Failure,
        }
    }

    /// Internal failures whose details must not leak to end users
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AppError::HashingFailed(_)
                | AppError::SigningFailed(_)
                | AppError::Store(_)
                | AppError::Config(_)
                | AppError::Internal(_)
        )
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => AppError::NotFound(msg),
            StoreError::Conflict(msg) => AppError::AlreadyExists(msg),
            StoreError::Backend(msg) => AppError::Store(msg),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Error body for callers that render failures
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = err.code();
        let message = if err.is_internal() {
            tracing::error!("Internal error: {}", err);
            "Internal server error".to_string()
        } else {
            err.to_string()
        };

        ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
