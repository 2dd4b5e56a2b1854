//! SeaORM entity definitions for the pet transit tables.

pub mod prelude;

pub mod flight;
pub mod pet;
pub mod user;
