//! HTTP request handlers.
//!
//! Controllers extract path, query and body input, convert DTOs into validated
//! parameters, call the matching service and convert the resulting domain models back
//! into DTOs. Every handler is annotated with `#[utoipa::path]` so the router can
//! assemble the OpenAPI document from the same definitions.

pub mod flight;
pub mod pet;
pub mod user;

#[cfg(test)]
mod test;
