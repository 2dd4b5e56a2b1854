//! Pet factory for creating test pet entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pets owned by an existing user.
///
/// The owner ID is required since the pet table has a foreign key to users.
///
/// # Example
///
/// ```rust,ignore
/// let pet = PetFactory::new(&db, user.id)
///     .origin("Bogota")
///     .destination("Cali")
///     .build()
///     .await?;
/// ```
pub struct PetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    origin: String,
    destination: String,
    breed: String,
    age: i32,
    date: NaiveDate,
    user_id: i32,
}

impl<'a> PetFactory<'a> {
    /// Creates a new PetFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pet {n}"` where n is auto-incremented
    /// - origin / destination: `"Bogota"` / `"Lima"`
    /// - breed: `"Mestizo"`
    /// - age: `3`
    /// - date: `2024-01-01`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the owning user
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Pet {}", id),
            origin: "Bogota".to_string(),
            destination: "Lima".to_string(),
            breed: "Mestizo".to_string(),
            age: 3,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            user_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = breed.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets origin, destination and date in one call.
    pub fn route(
        self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        self.origin(origin).destination(destination).date(date)
    }

    /// Builds and inserts the pet entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pet::Model)` - Created pet entity
    /// - `Err(DbErr)` - Database error during insert, including a missing owner
    pub async fn build(self) -> Result<entity::pet::Model, DbErr> {
        entity::pet::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            origin: ActiveValue::Set(self.origin),
            destination: ActiveValue::Set(self.destination),
            breed: ActiveValue::Set(self.breed),
            age: ActiveValue::Set(self.age),
            date: ActiveValue::Set(self.date),
            user_id: ActiveValue::Set(self.user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pet with default values for the given owner.
///
/// Shorthand for `PetFactory::new(db, user_id).build().await`.
pub async fn create_pet(db: &DatabaseConnection, user_id: i32) -> Result<entity::pet::Model, DbErr> {
    PetFactory::new(db, user_id).build().await
}
