//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are only built
//! through validating constructors, so anything holding one has passed its field
//! constraints.

pub mod flight;
pub mod pet;
pub mod search;
pub mod user;
