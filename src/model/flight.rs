use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlightDto {
    pub id: i32,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub capacity: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateFlightDto {
    #[serde(alias = "origen")]
    pub origin: String,
    #[serde(alias = "destine")]
    pub destination: String,
    #[serde(alias = "fecha")]
    pub date: String, // Format: "YYYY-MM-DD"
    #[serde(alias = "capacidad")]
    pub capacity: i32,
}

/// One (origin, destination, date) group of registered pets.
///
/// Counts pet registrations sharing a route and day; it is not derived from the
/// flight table or its capacity.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailableFlightDto {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub count: i64,
}
