//! System API key extractor
//!
//! Guards the system-scoped create route with a shared secret header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use constant_time_eq::constant_time_eq;

use crate::response::ApiError;
use crate::state::AppState;

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Proof that the request carried the configured API key.
///
/// With no key configured every request is refused.
#[derive(Debug, Clone, Copy)]
pub struct SystemApiKey;

#[async_trait]
impl<S> FromRequestParts<S> for SystemApiKey
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(expected) = app_state.config().links.private_api_key.as_deref() else {
            tracing::warn!("System API key requested but none is configured");
            return Err(ApiError::Forbidden);
        };

        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        if key_matches(provided, expected) {
            Ok(SystemApiKey)
        } else {
            Err(ApiError::Forbidden)
        }
    }
}

fn key_matches(provided: Option<&str>, expected: &str) -> bool {
    provided.is_some_and(|key| constant_time_eq(key.as_bytes(), expected.as_bytes()))
}
