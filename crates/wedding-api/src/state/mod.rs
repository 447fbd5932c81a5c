//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration and the optional database pool.

use std::sync::Arc;

use wedding_common::AppConfig;
use wedding_db::PgPool;
use wedding_service::ServiceContext;

use crate::cookies::SessionCookie;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Database pool for readiness checks; absent when running on the in-memory store
    pool: Option<PgPool>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig, pool: Option<PgPool>) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            pool,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the database pool, if one is configured
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Session cookie builder for the current environment
    pub fn session_cookie(&self) -> SessionCookie {
        SessionCookie::new(self.config.app.env.is_production())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("has_pool", &self.pool.is_some())
            .finish()
    }
}
