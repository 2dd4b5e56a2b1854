//! Pet domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::pet::{CreatePetDto, PetDto, PetWithOwnerDto},
    server::{
        error::AppError,
        model::user::User,
        util::validate::{Validator, TEXT_LENGTH},
    },
};

/// A pet registered for transport on a route and day.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: i32,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub breed: String,
    pub age: i32,
    pub date: NaiveDate,
    /// ID of the owning user.
    pub user_id: i32,
}

impl Pet {
    /// Converts an entity model to a pet domain model at the repository boundary.
    pub fn from_entity(entity: entity::pet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            origin: entity.origin,
            destination: entity.destination,
            breed: entity.breed,
            age: entity.age,
            date: entity.date,
            user_id: entity.user_id,
        }
    }

    /// Converts the pet domain model to a DTO for API responses.
    pub fn into_dto(self) -> PetDto {
        PetDto {
            id: self.id,
            name: self.name,
            origin: self.origin,
            destination: self.destination,
            breed: self.breed,
            age: self.age,
            date: self.date,
            user_id: self.user_id,
        }
    }
}

/// A pet joined with its owning user.
#[derive(Debug, Clone, PartialEq)]
pub struct PetWithOwner {
    pub pet: Pet,
    pub owner: User,
}

impl PetWithOwner {
    pub fn into_dto(self) -> PetWithOwnerDto {
        PetWithOwnerDto {
            pet: self.pet.into_dto(),
            owner: self.owner.into_dto(),
        }
    }
}

/// Validated parameters for creating a pet.
///
/// The owner ID is not checked against the user table here; a missing owner is
/// rejected by the storage foreign key when the pet is inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePetParam {
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub breed: String,
    pub age: i32,
    pub date: NaiveDate,
    pub user_id: i32,
}

impl CreatePetParam {
    /// Validates a create request and converts it into parameters.
    ///
    /// # Arguments
    /// - `dto` - Raw pet creation body
    ///
    /// # Returns
    /// - `Ok(CreatePetParam)` - Every field satisfied its constraints
    /// - `Err(AppError::ValidationErr)` - One or more fields were invalid
    pub fn from_dto(dto: CreatePetDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        validator
            .length("name", &dto.name, TEXT_LENGTH)
            .length("origin", &dto.origin, TEXT_LENGTH)
            .length("destination", &dto.destination, TEXT_LENGTH)
            .length("breed", &dto.breed, TEXT_LENGTH)
            .at_least("age", dto.age.into(), 0);
        let date = validator.date("date", &dto.date);

        match date {
            Some(date) if validator.is_valid() => Ok(Self {
                name: dto.name,
                origin: dto.origin,
                destination: dto.destination,
                breed: dto.breed,
                age: dto.age,
                date,
                user_id: dto.user_id,
            }),
            _ => Err(validator.into_error().into()),
        }
    }
}
