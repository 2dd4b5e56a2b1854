use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::flight::FlightRepository,
    error::AppError,
    model::flight::{CreateFlightParam, Flight},
};

pub struct FlightService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new flight inside a transaction
    pub async fn create(&self, param: CreateFlightParam) -> Result<Flight, AppError> {
        let flight = self
            .db
            .transaction::<_, Flight, DbErr>(|txn| {
                Box::pin(async move { FlightRepository::new(txn).create(param).await })
            })
            .await?;

        tracing::info!(
            "Recorded flight {} from {} to {} on {}",
            flight.id,
            flight.origin,
            flight.destination,
            flight.date
        );

        Ok(flight)
    }

    /// Gets a flight by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Flight>, AppError> {
        Ok(FlightRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets every recorded flight ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Flight>, AppError> {
        Ok(FlightRepository::new(self.db).get_all().await?)
    }
}
