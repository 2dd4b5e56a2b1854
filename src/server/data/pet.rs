//! Pet data repository for database operations.
//!
//! Besides the plain create and read operations this repository hosts the filtered
//! queries over pets: the optionally filtered listing, the listing joined with each
//! pet's owner, and the per-route registration count reported as available flights.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    flight::AvailableFlight,
    pet::{CreatePetParam, Pet, PetWithOwner},
    search::PetFilter,
    user::User,
};

/// Row shape of the grouped route count query.
#[derive(Debug, FromQueryResult)]
struct RouteCountRow {
    origin: String,
    destination: String,
    date: NaiveDate,
    count: i64,
}

/// Repository providing database operations for pet records.
pub struct PetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PetRepository<'a, C> {
    /// Creates a new PetRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    ///
    /// # Returns
    /// - `PetRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new pet and returns it with its generated ID.
    ///
    /// The owner is not looked up beforehand; the foreign key on `user_id` rejects
    /// pets whose owner does not exist.
    ///
    /// # Arguments
    /// - `param` - Validated pet creation parameters
    ///
    /// # Returns
    /// - `Ok(Pet)` - The stored pet
    /// - `Err(DbErr)` - Database error during insert, including foreign key violations
    pub async fn create(&self, param: CreatePetParam) -> Result<Pet, DbErr> {
        let entity = entity::pet::ActiveModel {
            name: ActiveValue::Set(param.name),
            origin: ActiveValue::Set(param.origin),
            destination: ActiveValue::Set(param.destination),
            breed: ActiveValue::Set(param.breed),
            age: ActiveValue::Set(param.age),
            date: ActiveValue::Set(param.date),
            user_id: ActiveValue::Set(param.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pet::from_entity(entity))
    }

    /// Finds a pet by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Pet))` - Pet found
    /// - `Ok(None)` - No pet with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Pet>, DbErr> {
        let entity = entity::prelude::Pet::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Pet::from_entity))
    }

    /// Gets every stored pet ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Pet>, DbErr> {
        self.search(&PetFilter::default()).await
    }

    /// Gets pets matching every predicate of the filter, ordered by ID.
    ///
    /// An empty filter returns all pets.
    ///
    /// # Arguments
    /// - `filter` - Optional equality predicates on origin, destination, date and owner
    ///
    /// # Returns
    /// - `Ok(Vec<Pet>)` - Matching pets
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, filter: &PetFilter) -> Result<Vec<Pet>, DbErr> {
        let entities = filter
            .apply(entity::prelude::Pet::find())
            .order_by_asc(entity::pet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Pet::from_entity).collect())
    }

    /// Gets pets matching the filter together with their owners.
    ///
    /// Uses an inner join on the owner foreign key, so a pet whose owner row does not
    /// exist is left out even though `search` would return it.
    ///
    /// # Arguments
    /// - `filter` - Optional equality predicates on origin, destination, date and owner
    ///
    /// # Returns
    /// - `Ok(Vec<PetWithOwner>)` - Matching pets with owners, ordered by pet ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn search_with_owner(&self, filter: &PetFilter) -> Result<Vec<PetWithOwner>, DbErr> {
        let rows = filter
            .apply(entity::prelude::Pet::find())
            .join(JoinType::InnerJoin, entity::pet::Relation::User.def())
            .select_also(entity::prelude::User)
            .order_by_asc(entity::pet::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(pet, owner)| {
                owner.map(|owner| PetWithOwner {
                    pet: Pet::from_entity(pet),
                    owner: User::from_entity(owner),
                })
            })
            .collect())
    }

    /// Counts pets per (origin, destination, date) after applying the filter.
    ///
    /// The owner predicate of the filter is honoured if set. Groups are ordered by
    /// origin, destination and date.
    ///
    /// # Arguments
    /// - `filter` - Optional equality predicates applied before grouping
    ///
    /// # Returns
    /// - `Ok(Vec<AvailableFlight>)` - One entry per distinct route and day
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_by_route(&self, filter: &PetFilter) -> Result<Vec<AvailableFlight>, DbErr> {
        let rows = filter
            .apply(entity::prelude::Pet::find())
            .select_only()
            .column(entity::pet::Column::Origin)
            .column(entity::pet::Column::Destination)
            .column(entity::pet::Column::Date)
            .column_as(entity::pet::Column::Id.count(), "count")
            .group_by(entity::pet::Column::Origin)
            .group_by(entity::pet::Column::Destination)
            .group_by(entity::pet::Column::Date)
            .order_by_asc(entity::pet::Column::Origin)
            .order_by_asc(entity::pet::Column::Destination)
            .order_by_asc(entity::pet::Column::Date)
            .into_model::<RouteCountRow>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| AvailableFlight {
                origin: row.origin,
                destination: row.destination,
                date: row.date,
                count: row.count,
            })
            .collect())
    }
}
