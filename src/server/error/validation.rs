use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

/// A constraint failure on one input field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// Name of the offending field as it appears on the wire
    pub field: String,
    /// Human readable description of the failed constraint
    pub message: String,
}

/// Request input failed one or more declared field constraints.
///
/// Produced before any database access. Carries every failing field of the
/// request rather than only the first one.
#[derive(Error, Debug)]
#[error("Request input failed validation")]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    /// Names of all failing fields, in the order they were checked.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }
}

/// Converts validation errors into a 422 Unprocessable Entity response listing
/// every failing field.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request input: {:?}", self.field_names());

        let error = self.to_string();
        let fields = self
            .fields
            .into_iter()
            .map(|f| FieldErrorDto {
                field: f.field,
                message: f.message,
            })
            .collect();

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorDto { error, fields }),
        )
            .into_response()
    }
}
