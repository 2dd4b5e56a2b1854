//! Wire-level DTOs shared by the HTTP API and its tests.
//!
//! These types define the JSON shapes of request bodies and responses. Create DTOs carry
//! raw, unvalidated input; the server converts them into validated parameter models
//! before anything reaches the database.

pub mod api;
pub mod flight;
pub mod pet;
pub mod user;
