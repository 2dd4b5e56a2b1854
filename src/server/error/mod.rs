//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr, TransactionError};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Database errors are classified on conversion
/// so that constraint failures and an unreachable store map to distinct variants.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Request input failed one or more field constraints.
    ///
    /// Delegates to `ValidationError::into_response()` which returns
    /// 422 Unprocessable Entity with the offending fields.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM that has no more specific mapping.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(DbErr),

    /// Insert rejected by a foreign key or uniqueness constraint.
    ///
    /// Results in 409 Conflict. Raised, for example, when a pet references a user
    /// that does not exist.
    ///
    /// # Fields
    /// - Constraint message reported by the database
    #[error("Storage constraint violated: {0}")]
    ConstraintViolation(String),

    /// The database could not be reached or no connection could be acquired.
    ///
    /// Results in 503 Service Unavailable with a generic message; details are
    /// logged server-side.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(DbErr),

    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

/// Classifies SeaORM errors at the application boundary.
///
/// Foreign key and uniqueness failures become `ConstraintViolation`, connection
/// failures become `StorageUnavailable`, everything else stays a plain `DbErr`.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if let Some(
            SqlErr::ForeignKeyConstraintViolation(msg) | SqlErr::UniqueConstraintViolation(msg),
        ) = err.sql_err()
        {
            return AppError::ConstraintViolation(msg);
        }

        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => AppError::StorageUnavailable(err),
            err => AppError::DbErr(err),
        }
    }
}

/// Unwraps the error of a failed transaction and classifies it like any other `DbErr`.
impl From<TransactionError<DbErr>> for AppError {
    fn from(err: TransactionError<DbErr>) -> Self {
        match err {
            TransactionError::Connection(err) | TransactionError::Transaction(err) => err.into(),
        }
    }
}

/// Malformed or mistyped JSON bodies are reported as 400 Bad Request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Validation errors delegate to their own response handling, while other errors
/// use standard mappings. Internal errors are logged with full details but return
/// generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `ConstraintViolation` variant
/// - 422 Unprocessable Entity - For `ValidationErr`, delegated to `ValidationError::into_response()`
/// - 503 Service Unavailable - For `StorageUnavailable` variant
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::ConstraintViolation(msg) => {
                tracing::debug!("Constraint violation: {}", msg);
                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Request conflicts with stored data, check referenced IDs"
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            Self::StorageUnavailable(err) => {
                tracing::error!("Storage unavailable: {}", err);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Service temporarily unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
