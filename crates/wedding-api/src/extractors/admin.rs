//! Admin session extractor
//!
//! Reads the session token from the `admin_token` cookie, falling back to an
//! `Authorization: Bearer` header, and verifies it before the handler runs.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization, Cookie},
    TypedHeader,
};
use wedding_service::{AdminIdentity, AdminService};

use crate::cookies::ADMIN_COOKIE;
use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated administrator
#[derive(Debug, Clone)]
pub struct AdminSession(pub AdminIdentity);

#[async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = match session_cookie(parts, state).await {
            Some(token) => token,
            None => bearer_token(parts, state).await.ok_or_else(|| {
                tracing::debug!("Admin request without session token");
                ApiError::Unauthorized
            })?,
        };

        let app_state = AppState::from_ref(state);
        let identity = AdminService::new(app_state.service_context())
            .authenticate(&token)
            .map_err(|_| ApiError::Unauthorized)?;

        Ok(AdminSession(identity))
    }
}

async fn session_cookie<S: Send + Sync>(parts: &mut Parts, state: &S) -> Option<String> {
    let TypedHeader(cookie) = TypedHeader::<Cookie>::from_request_parts(parts, state)
        .await
        .ok()?;
    cookie
        .get(ADMIN_COOKIE)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

async fn bearer_token<S: Send + Sync>(parts: &mut Parts, state: &S) -> Option<String> {
    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()?;
    Some(bearer.token().to_string())
}
