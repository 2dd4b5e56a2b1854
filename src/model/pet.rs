use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PetDto {
    pub id: i32,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub breed: String,
    pub age: i32,
    pub date: NaiveDate,
    pub user_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePetDto {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "origen")]
    pub origin: String,
    #[serde(alias = "destine")]
    pub destination: String,
    #[serde(alias = "raza")]
    pub breed: String,
    #[serde(alias = "edad")]
    pub age: i32,
    #[serde(alias = "fecha")]
    pub date: String, // Format: "YYYY-MM-DD"
    pub user_id: i32,
}

/// A pet together with the user that owns it.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PetWithOwnerDto {
    pub pet: PetDto,
    pub owner: UserDto,
}
