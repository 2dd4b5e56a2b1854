//! Filter specification for pet searches and the available flights aggregate.
//!
//! A `PetFilter` is a set of optional equality predicates over the pet table. It is
//! built once from raw query parameters, turned into a single `Condition::all()` and
//! applied to any SeaORM query through `PetFilter::apply`, so plain selects, the owner
//! join and the grouped count all share the same filtering rule.
//!
//! An empty string is treated the same as an absent parameter. Searching for rows whose
//! filtered column is literally empty is therefore not possible.

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, Condition, QueryFilter};

use crate::server::{error::AppError, util::validate::Validator};

/// Optional exact-match filters over pet records, combined with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetFilter {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
    pub owner_id: Option<i32>,
}

impl PetFilter {
    /// Builds a filter from raw query parameter values.
    ///
    /// Empty values are dropped. A non-empty `date` must be `YYYY-MM-DD` and a
    /// non-empty `owner_id` must be an integer.
    ///
    /// # Returns
    /// - `Ok(PetFilter)` - Parsed filter
    /// - `Err(AppError::ValidationErr)` - `date` or `owner_id` could not be parsed
    pub fn parse(
        origin: Option<String>,
        destination: Option<String>,
        date: Option<String>,
        owner_id: Option<String>,
    ) -> Result<Self, AppError> {
        let mut validator = Validator::new();

        let date = non_empty(date).and_then(|value| validator.date("date", &value));
        let owner_id = non_empty(owner_id).and_then(|value| validator.integer("owner_id", &value));

        validator.finish()?;

        Ok(Self {
            origin: non_empty(origin),
            destination: non_empty(destination),
            date,
            owner_id,
        })
    }

    /// Whether no predicate is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Builds the AND-combined equality condition over the pet columns.
    pub fn condition(&self) -> Condition {
        Condition::all()
            .add_option(
                self.origin
                    .clone()
                    .map(|origin| entity::pet::Column::Origin.eq(origin)),
            )
            .add_option(
                self.destination
                    .clone()
                    .map(|destination| entity::pet::Column::Destination.eq(destination)),
            )
            .add_option(self.date.map(|date| entity::pet::Column::Date.eq(date)))
            .add_option(
                self.owner_id
                    .map(|owner_id| entity::pet::Column::UserId.eq(owner_id)),
            )
    }

    /// Applies the filter to any query over the pet table.
    pub fn apply<Q: QueryFilter>(&self, query: Q) -> Q {
        query.filter(self.condition())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
