//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a pet owned by that user, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, pet))` - The owner and the pet
/// - `Err(DbErr)` - Database error during creation
pub async fn create_pet_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::pet::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let pet = crate::factory::pet::create_pet(db, user.id).await?;

    Ok((user, pet))
}
