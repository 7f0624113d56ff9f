pub mod auth;
pub mod database;
pub mod errors;
pub mod models;

use sqlx::PgPool;
use sqlx::migrate::Migrator;

use crate::errors::AppError;

/// Schema migrations for every storefront table.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Brings the schema up to date.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("Storefront migrations applied");
    Ok(())
}
