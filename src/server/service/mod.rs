//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Transaction Management**: Every write runs inside its own transaction, so a
//!   rejected insert leaves no partial state behind
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Classification**: Converting storage errors into `AppError` variants

pub mod flight;
pub mod pet;
pub mod user;
