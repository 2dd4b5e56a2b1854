use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Connects to the database described by the configuration.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database pool
/// - `Err(AppError)` - Failed to connect to the database
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    tracing::info!("Connected to database");

    Ok(db)
}

/// Creates the user, pet and flight tables if they do not exist yet.
///
/// Runs all pending SeaORM migrations. Applied migrations are recorded, so running
/// this against an initialized database is a no-op, and existing rows are never
/// touched.
///
/// # Arguments
/// - `db` - Connected database
///
/// # Returns
/// - `Ok(())` - Schema is up-to-date
/// - `Err(AppError)` - A migration failed
pub async fn initialize_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    Migrator::up(db, None).await?;

    tracing::info!("Database schema initialized");

    Ok(())
}
