//! Flight factory for creating test flight entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    origin: String,
    destination: String,
    date: NaiveDate,
    capacity: i32,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - origin / destination: `"Bogota"` / `"Lima"`
    /// - date: `2024-01-01`
    /// - capacity: `10`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            origin: "Bogota".to_string(),
            destination: "Lima".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            capacity: 10,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds and inserts the flight entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - Created flight entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            id: ActiveValue::NotSet,
            origin: ActiveValue::Set(self.origin),
            destination: ActiveValue::Set(self.destination),
            date: ActiveValue::Set(self.date),
            capacity: ActiveValue::Set(self.capacity),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values.
///
/// Shorthand for `FlightFactory::new(db).build().await`.
pub async fn create_flight(db: &DatabaseConnection) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db).build().await
}
