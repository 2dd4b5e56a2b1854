//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! entity. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer.
//!
//! Every repository borrows its connection explicitly and is generic over
//! `ConnectionTrait`, so the same code runs against the pooled `DatabaseConnection`
//! for reads and against a `DatabaseTransaction` for writes.

pub mod flight;
pub mod pet;
pub mod user;
