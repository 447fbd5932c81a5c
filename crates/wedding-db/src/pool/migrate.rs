//! Schema migrations

use std::path::Path;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPool;
use tracing::info;

/// Directory holding the `.sql` migrations of this crate
pub const MIGRATIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/migrations");

/// Apply pending migrations from `dir` (defaults to [`MIGRATIONS_DIR`])
pub async fn run_migrations(pool: &PgPool, dir: Option<&Path>) -> Result<(), MigrateError> {
    let dir = dir.unwrap_or_else(|| Path::new(MIGRATIONS_DIR));
    let migrator = Migrator::new(dir).await?;

    migrator.run(pool).await?;
    info!(migrations = migrator.iter().count(), "Database schema is up to date");

    Ok(())
}
