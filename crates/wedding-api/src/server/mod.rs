//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use wedding_common::{AdminCredentials, AppConfig, AppError, JwtService};
use wedding_core::traits::{AdminRepository, InvitationRepository};
use wedding_db::{
    create_pool, run_migrations, InMemoryStore, PgAdminRepository, PgInvitationRepository,
};
use wedding_service::{ServiceContext, ServiceContextBuilder};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` when the rate limit settings are unusable
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let router = apply_rate_limit(create_router(), &config.rate_limit)?.merge(health_routes());
    let router = apply_middleware(router, config);
    Ok(router.with_state(state))
}

/// Initialize all dependencies against PostgreSQL and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, None)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("Database migrations applied");
    }

    let invitation_repo = Arc::new(PgInvitationRepository::new(pool.clone()));
    let admin_repo = Arc::new(PgAdminRepository::new(pool.clone()));

    let service_context = build_service_context(&config, invitation_repo, admin_repo)?;
    Ok(AppState::new(service_context, config, Some(pool)))
}

/// Create AppState backed by an in-memory store instead of a database
pub fn create_memory_app_state(
    config: AppConfig,
    store: InMemoryStore,
) -> Result<AppState, AppError> {
    let service_context =
        build_service_context(&config, Arc::new(store.clone()), Arc::new(store))?;
    Ok(AppState::new(service_context, config, None))
}

fn build_service_context(
    config: &AppConfig,
    invitation_repo: Arc<dyn InvitationRepository>,
    admin_repo: Arc<dyn AdminRepository>,
) -> Result<ServiceContext, AppError> {
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.session_ttl));
    let admin_credentials = Arc::new(AdminCredentials::from_config(&config.admin)?);

    ServiceContextBuilder::new()
        .invitation_repo(invitation_repo)
        .admin_repo(admin_repo)
        .jwt_service(jwt_service)
        .admin_credentials(admin_credentials)
        .links(Arc::new(config.links.clone()))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
