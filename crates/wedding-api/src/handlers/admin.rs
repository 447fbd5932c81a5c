//! Admin handlers
//!
//! Login and logout manage the session cookie; everything else requires an
//! [`AdminSession`].

use axum::{
    extract::{Path, State},
    http::{header::SET_COOKIE, HeaderName},
    response::AppendHeaders,
    Json,
};
use wedding_service::dto::{
    AdminInvitationResponse, AdminLoginRequest, CreateInvitationRequest,
    CreateInvitationResponse, InvitationResponse, LoginResponse, StatsResponse, SuccessResponse,
    TemplateResponse, UpdateInvitationRequest,
};
use wedding_service::{AdminService, InvitationService};

use crate::extractors::{AdminSession, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// `Set-Cookie` response header
type SetCookie = AppendHeaders<[(HeaderName, String); 1]>;

/// Login with the administrator credentials
///
/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AdminLoginRequest>,
) -> ApiResult<(SetCookie, Json<LoginResponse>)> {
    let service = AdminService::new(state.service_context());
    let response = service.login(request).await?;
    let cookie = state
        .session_cookie()
        .issue(&response.token, response.expires_in);
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(response)))
}

/// Clear the session cookie
///
/// POST /api/admin/logout
pub async fn logout(
    State(state): State<AppState>,
) -> (SetCookie, Json<SuccessResponse>) {
    let cookie = state.session_cookie().clear();
    (AppendHeaders([(SET_COOKIE, cookie)]), Json(SuccessResponse::ok()))
}

/// List all invitations with RSVP aggregates
///
/// GET /api/admin/invitations
pub async fn list_invitations(
    State(state): State<AppState>,
    _session: AdminSession,
) -> ApiResult<Json<Vec<AdminInvitationResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.list_invitations().await?))
}

/// Create an invitation from the dashboard
///
/// POST /api/admin/invitations
pub async fn create_invitation(
    State(state): State<AppState>,
    AdminSession(admin): AdminSession,
    ValidatedJson(request): ValidatedJson<CreateInvitationRequest>,
) -> ApiResult<Created<Json<CreateInvitationResponse>>> {
    tracing::debug!(admin = %admin.username, "Admin creating invitation");
    let service = InvitationService::new(state.service_context());
    let response = service.create_invitation(request).await?;
    Ok(Created(Json(response)))
}

/// Edit an invitation
///
/// PUT /api/admin/invitations/:uuid
pub async fn update_invitation(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(uuid): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateInvitationRequest>,
) -> ApiResult<Json<InvitationResponse>> {
    let service = InvitationService::new(state.service_context());
    Ok(Json(service.update_invitation(&uuid, request).await?))
}

/// Dashboard totals
///
/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    _session: AdminSession,
) -> ApiResult<Json<StatsResponse>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.stats().await?))
}

/// Active templates
///
/// GET /api/admin/templates
pub async fn templates(
    State(state): State<AppState>,
    _session: AdminSession,
) -> ApiResult<Json<Vec<TemplateResponse>>> {
    let service = AdminService::new(state.service_context());
    Ok(Json(service.templates().await?))
}
