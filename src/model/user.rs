use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub origin: String,
    pub destination: String,
    pub age: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateUserDto {
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(alias = "origen")]
    pub origin: String,
    #[serde(alias = "destine")]
    pub destination: String,
    #[serde(alias = "edad")]
    pub age: i32,
}
