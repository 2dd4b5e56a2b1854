use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// A single failed field constraint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Error body returned when request input fails validation.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub fields: Vec<FieldErrorDto>,
}
