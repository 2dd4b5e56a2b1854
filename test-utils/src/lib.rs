//! Pet Transit Test Utils
//!
//! Provides shared testing utilities for the pet transit service. This crate offers a
//! builder for creating test contexts backed by in-memory SQLite databases, plus factories
//! that insert users, pets and flights with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which tables exist
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Entity factories for seeding data
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_pet_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_all_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, pet) = factory::helpers::create_pet_with_owner(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
