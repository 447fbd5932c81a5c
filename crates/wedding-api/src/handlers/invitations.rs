//! Invitation handlers
//!
//! Public invitation reads and the system-scoped create endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use wedding_service::dto::{CreateInvitationRequest, CreateInvitationResponse, InvitationResponse};
use wedding_service::InvitationService;

use crate::extractors::{SystemApiKey, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create an invitation on behalf of a trusted system
///
/// POST /api/invitations
pub async fn create_invitation(
    State(state): State<AppState>,
    _key: SystemApiKey,
    ValidatedJson(request): ValidatedJson<CreateInvitationRequest>,
) -> ApiResult<Created<Json<CreateInvitationResponse>>> {
    let service = InvitationService::new(state.service_context());
    let response = service.create_invitation(request).await?;
    Ok(Created(Json(response)))
}

/// Get an invitation by uuid
///
/// GET /api/invitations/:uuid
pub async fn get_invitation(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<InvitationResponse>> {
    let service = InvitationService::new(state.service_context());
    let response = service.get_invitation(&uuid).await?;
    Ok(Json(response))
}

/// Get an invitation by short code
///
/// GET /api/invitations/by-code/:short_code
pub async fn get_invitation_by_code(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> ApiResult<Json<InvitationResponse>> {
    let service = InvitationService::new(state.service_context());
    let response = service.get_by_short_code(&short_code).await?;
    Ok(Json(response))
}
