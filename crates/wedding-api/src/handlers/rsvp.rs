//! RSVP handlers

use axum::{
    extract::{Path, State},
    Json,
};
use wedding_service::dto::{SubmitRsvpRequest, SuccessResponse};
use wedding_service::RsvpService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Submit a guest response
///
/// POST /api/rsvp/:uuid
pub async fn submit_rsvp(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    ValidatedJson(request): ValidatedJson<SubmitRsvpRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let service = RsvpService::new(state.service_context());
    let response = service.submit_rsvp(&uuid, request).await?;
    Ok(Json(response))
}
