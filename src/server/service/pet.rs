use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::pet::PetRepository,
    error::AppError,
    model::{
        flight::AvailableFlight,
        pet::{CreatePetParam, Pet, PetWithOwner},
        search::PetFilter,
    },
};

pub struct PetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a pet for transport inside a transaction.
    ///
    /// A missing owner surfaces as `AppError::ConstraintViolation` and the transaction
    /// is rolled back.
    pub async fn create(&self, param: CreatePetParam) -> Result<Pet, AppError> {
        let result = self
            .db
            .transaction::<_, Pet, DbErr>(|txn| {
                Box::pin(async move { PetRepository::new(txn).create(param).await })
            })
            .await;

        match result {
            Ok(pet) => {
                tracing::info!(
                    "Registered pet {} for user {} on {} -> {} ({})",
                    pet.id,
                    pet.user_id,
                    pet.origin,
                    pet.destination,
                    pet.date
                );
                Ok(pet)
            }
            Err(err) => {
                let err = AppError::from(err);
                if matches!(err, AppError::ConstraintViolation(_)) {
                    tracing::warn!("Rejected pet registration: owner does not exist");
                }
                Err(err)
            }
        }
    }

    /// Gets a pet by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Pet>, AppError> {
        Ok(PetRepository::new(self.db).find_by_id(id).await?)
    }

    /// Gets every registered pet ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Pet>, AppError> {
        Ok(PetRepository::new(self.db).get_all().await?)
    }

    /// Gets pets matching every set predicate of the filter
    pub async fn search(&self, filter: &PetFilter) -> Result<Vec<Pet>, AppError> {
        if filter.is_empty() {
            tracing::debug!("Searching pets without filters");
        } else {
            tracing::debug!("Searching pets with {:?}", filter);
        }

        Ok(PetRepository::new(self.db).search(filter).await?)
    }

    /// Gets pets matching the filter paired with their owners
    pub async fn search_with_owner(&self, filter: &PetFilter) -> Result<Vec<PetWithOwner>, AppError> {
        Ok(PetRepository::new(self.db).search_with_owner(filter).await?)
    }

    /// Counts registered pets per route and day.
    ///
    /// Each group is reported as an available flight with the number of pets booked
    /// on it.
    pub async fn available_flights(
        &self,
        filter: &PetFilter,
    ) -> Result<Vec<AvailableFlight>, AppError> {
        Ok(PetRepository::new(self.db).count_by_route(filter).await?)
    }
}
