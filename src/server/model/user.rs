//! User domain models and parameters.

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        error::AppError,
        util::validate::{Validator, TEXT_LENGTH},
    },
};

/// A registered user who may own pets.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub age: i32,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            origin: entity.origin,
            destination: entity.destination,
            age: entity.age,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            origin: self.origin,
            destination: self.destination,
            age: self.age,
        }
    }
}

/// Validated parameters for creating a user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParam {
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub age: i32,
}

impl CreateUserParam {
    /// Validates a create request and converts it into parameters.
    ///
    /// # Arguments
    /// - `dto` - Raw user creation body
    ///
    /// # Returns
    /// - `Ok(CreateUserParam)` - Every field satisfied its constraints
    /// - `Err(AppError::ValidationErr)` - One or more fields were invalid
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let mut validator = Validator::new();
        validator
            .length("name", &dto.name, TEXT_LENGTH)
            .length("origin", &dto.origin, TEXT_LENGTH)
            .length("destination", &dto.destination, TEXT_LENGTH)
            .at_least("age", dto.age.into(), 0);
        validator.finish()?;

        Ok(Self {
            name: dto.name,
            origin: dto.origin,
            destination: dto.destination,
            age: dto.age,
        })
    }
}
