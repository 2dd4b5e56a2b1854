//! Flight domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::flight::{AvailableFlightDto, CreateFlightDto, FlightDto},
    server::{
        error::AppError,
        util::validate::{Validator, TEXT_LENGTH},
    },
};

/// A scheduled flight with a seat capacity.
///
/// Flights are correlated with pets only by matching origin, destination and date
/// values; there is no foreign key between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i32,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub capacity: i32,
}

impl Flight {
    /// Converts an entity model to a flight domain model at the repository boundary.
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            id: entity.id,
            origin: entity.origin,
            destination: entity.destination,
            date: entity.date,
            capacity: entity.capacity,
        }
    }

    /// Converts the flight domain model to a DTO for API responses.
    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.id,
            origin: self.origin,
            destination: self.destination,
            date: self.date,
            capacity: self.capacity,
        }
    }
}

/// Validated parameters for creating a flight.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFlightParam {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub capacity: i32,
}

impl CreateFlightParam {
    /// Validates a create request and converts it into parameters.
    ///
    /// # Returns
    /// - `Ok(CreateFlightParam)` - Every field satisfied its constraints
    /// - `Err(AppError::ValidationErr)` - One or more fields were invalid
    pub fn from_dto(dto: CreateFlightDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        validator
            .length("origin", &dto.origin, TEXT_LENGTH)
            .length("destination", &dto.destination, TEXT_LENGTH);
        let date = validator.date("date", &dto.date);
        validator.at_least("capacity", dto.capacity.into(), 1);

        match date {
            Some(date) if validator.is_valid() => Ok(Self {
                origin: dto.origin,
                destination: dto.destination,
                date,
                capacity: dto.capacity,
            }),
            _ => Err(validator.into_error().into()),
        }
    }
}

/// One (origin, destination, date) group of pet registrations and its size.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailableFlight {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub count: i64,
}

impl AvailableFlight {
    pub fn into_dto(self) -> AvailableFlightDto {
        AvailableFlightDto {
            origin: self.origin,
            destination: self.destination,
            date: self.date,
            count: self.count,
        }
    }
}
