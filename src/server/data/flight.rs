//! Flight data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::flight::{CreateFlightParam, Flight};

/// Repository providing database operations for flight records.
pub struct FlightRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new flight and returns it with its generated ID.
    ///
    /// # Returns
    /// - `Ok(Flight)` - The stored flight
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateFlightParam) -> Result<Flight, DbErr> {
        let entity = entity::flight::ActiveModel {
            origin: ActiveValue::Set(param.origin),
            destination: ActiveValue::Set(param.destination),
            date: ActiveValue::Set(param.date),
            capacity: ActiveValue::Set(param.capacity),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Flight::from_entity(entity))
    }

    /// Finds a flight by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Flight))` - Flight found
    /// - `Ok(None)` - No flight with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, DbErr> {
        let entity = entity::prelude::Flight::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Flight::from_entity))
    }

    /// Gets every stored flight ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Flight>, DbErr> {
        let entities = entity::prelude::Flight::find()
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Flight::from_entity).collect())
    }
}
