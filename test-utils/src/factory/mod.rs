//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization and
//! a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let pet = factory::create_pet(&db, user.id).await?;
//! let flight = factory::create_flight(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let pet = factory::pet::PetFactory::new(&db, user.id)
//!     .origin("Bogota")
//!     .destination("Lima")
//!     .date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .build()
//!     .await?;
//! ```

pub mod flight;
pub mod helpers;
pub mod pet;
pub mod user;

pub use flight::create_flight;
pub use pet::create_pet;
pub use user::create_user;
