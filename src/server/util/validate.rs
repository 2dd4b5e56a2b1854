//! Field constraint checks run on request input before it reaches the database.
//!
//! Each parameter model lists its own constraints explicitly by calling the
//! `Validator` methods field by field. The validator collects every failure so a
//! single response reports all offending fields.

use chrono::NaiveDate;

use crate::server::error::validation::{FieldError, ValidationError};

/// Accepted calendar date format for request input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive character count bounds for a text field.
#[derive(Debug, Clone, Copy)]
pub struct Length {
    pub min: usize,
    pub max: usize,
}

/// Bounds shared by every name, place and breed field.
pub const TEXT_LENGTH: Length = Length { min: 2, max: 100 };

/// Collects field constraint failures for one request.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks that `value` has between `length.min` and `length.max` characters.
    pub fn length(&mut self, field: &str, value: &str, length: Length) -> &mut Self {
        let count = value.chars().count();

        if count < length.min || count > length.max {
            self.push(
                field,
                format!(
                    "must be between {} and {} characters, got {}",
                    length.min, length.max, count
                ),
            );
        }

        self
    }

    /// Checks that `value` is greater than or equal to `min`.
    pub fn at_least(&mut self, field: &str, value: i64, min: i64) -> &mut Self {
        if value < min {
            self.push(field, format!("must be at least {}, got {}", min, value));
        }

        self
    }

    /// Parses `value` as a `YYYY-MM-DD` date, recording a failure if it is malformed.
    ///
    /// # Returns
    /// - `Some(NaiveDate)` - The parsed date
    /// - `None` - The value is not a calendar date; a field error was recorded
    pub fn date(&mut self, field: &str, value: &str) -> Option<NaiveDate> {
        match parse_date(value) {
            Some(date) => Some(date),
            None => {
                self.push(
                    field,
                    format!("must be a calendar date formatted as YYYY-MM-DD, got '{}'", value),
                );
                None
            }
        }
    }

    /// Parses `value` as an integer ID, recording a failure if it is not one.
    pub fn integer(&mut self, field: &str, value: &str) -> Option<i32> {
        match value.trim().parse::<i32>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.push(field, format!("must be an integer, got '{}'", value));
                None
            }
        }
    }

    /// Whether no constraint has failed so far.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the collected failures into a `ValidationError`.
    pub fn into_error(self) -> ValidationError {
        ValidationError {
            fields: self.errors,
        }
    }

    /// Finishes validation.
    ///
    /// # Returns
    /// - `Ok(())` - Every checked field satisfied its constraints
    /// - `Err(ValidationError)` - At least one field failed; all failures are included
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.into_error())
        }
    }

    fn push(&mut self, field: &str, message: String) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message,
        });
    }
}

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
