//! Short link redirect

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use wedding_service::InvitationService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Redirect a short code to its invitation page with `302 Found`
///
/// GET /s/:short_code
pub async fn resolve_short_link(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> ApiResult<Response> {
    let service = InvitationService::new(state.service_context());
    let path = service.resolve_short_code(&short_code).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, path)]).into_response())
}
