//! # wedding-db
//!
//! Database layer implementing the wedding-core repository traits.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> model mappers
//! - PostgreSQL repository implementations
//! - [`InMemoryStore`], the same contracts without a database
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wedding_common::AppConfig;
//! use wedding_db::{create_pool, run_migrations, PgInvitationRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     run_migrations(&pool, None).await?;
//!     let invitations = PgInvitationRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, run_migrations, PgPool, MIGRATIONS_DIR};
pub use repositories::{PgAdminRepository, PgInvitationRepository};
