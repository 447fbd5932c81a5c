//! Route definitions
//!
//! JSON endpoints are mounted under /api; the short link redirect lives at /s.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{admin, health, invitations, rsvp, short_links};
use crate::state::AppState;

/// Create the main router with all rate-limited routes (health is separate)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .route("/s/:short_code", get(short_links::resolve_short_link))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::readiness_check))
}

/// JSON API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(invitation_routes())
        .merge(rsvp_routes())
        .merge(admin_routes())
}

/// Public invitation routes
fn invitation_routes() -> Router<AppState> {
    Router::new()
        .route("/invitations", post(invitations::create_invitation))
        .route("/invitations/:uuid", get(invitations::get_invitation))
        .route(
            "/invitations/by-code/:short_code",
            get(invitations::get_invitation_by_code),
        )
}

/// Guest response routes
fn rsvp_routes() -> Router<AppState> {
    Router::new().route("/rsvp/:uuid", post(rsvp::submit_rsvp))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(admin::login))
        .route("/admin/logout", post(admin::logout))
        .route(
            "/admin/invitations",
            get(admin::list_invitations).post(admin::create_invitation),
        )
        .route("/admin/invitations/:uuid", put(admin::update_invitation))
        .route("/admin/stats", get(admin::stats))
        .route("/admin/templates", get(admin::templates))
}
