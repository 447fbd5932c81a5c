//! PostgreSQL connection pool

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use wedding_common::DatabaseConfig;

const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections.min(config.max_connections))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
}

/// Connect a pool sized from the `DATABASE_*` settings
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect(&config.url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(max: u32, min: u32) -> DatabaseConfig {
        DatabaseConfig {
            url: "postgres://db/wedding".to_string(),
            max_connections: max,
            min_connections: min,
            acquire_timeout_secs: 4,
            run_migrations: false,
        }
    }

    #[test]
    fn test_pool_options_follow_config() {
        let options = pool_options(&config(4, 2));
        assert_eq!(options.get_max_connections(), 4);
        assert_eq!(options.get_min_connections(), 2);
        assert_eq!(options.get_acquire_timeout(), Duration::from_secs(4));
        assert_eq!(options.get_idle_timeout(), Some(IDLE_TIMEOUT));
    }

    #[test]
    fn test_min_connections_capped_by_max() {
        let options = pool_options(&config(2, 5));
        assert_eq!(options.get_min_connections(), 2);
    }
}
