//! Invitation service
//!
//! Creates, reads and edits invitations and resolves short links.

use tracing::{debug, info, instrument};
use uuid::Uuid;
use wedding_core::entities::Invitation;
use wedding_core::{normalize_short_code, parse_event_date, DomainError};

use crate::dto::{
    CreateInvitationRequest, CreateInvitationResponse, InvitationResponse,
    UpdateInvitationRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::validation::{required, required_if_present};

/// Invitation service
pub struct InvitationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InvitationService<'a> {
    /// Create a new InvitationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an invitation with a fresh uuid and short code
    #[instrument(skip(self, request))]
    pub async fn create_invitation(
        &self,
        request: CreateInvitationRequest,
    ) -> ServiceResult<CreateInvitationResponse> {
        let groom_name = required(&request.groom_name, "Groom name is required")?;
        let bride_name = required(&request.bride_name, "Bride name is required")?;
        let event_location = required(&request.event_location, "Event location is required")?;
        let event_date = parse_event_date(&request.event_date)?;

        let mut invitation = Invitation::new(groom_name, bride_name, event_date, event_location)
            .with_phone_number(request.phone_number.trim().to_string());

        if let Some(template_code) = request.template_code {
            invitation = invitation.with_template_code(template_code.trim().to_string());
        }
        if let Some(lang) = request.lang {
            invitation = invitation.with_lang(lang);
        }
        if let Some(content) = request.content {
            invitation = invitation.with_content(content);
        }

        self.ctx.invitation_repo().create(&invitation).await?;

        info!(
            uuid = %invitation.uuid,
            short_code = %invitation.short_code,
            "Invitation created"
        );

        Ok(self.created_response(invitation))
    }

    /// Get an invitation by its uuid
    #[instrument(skip(self))]
    pub async fn get_invitation(&self, key: &str) -> ServiceResult<InvitationResponse> {
        let key = required(key, "UUID is required")?;

        // A key that is not a uuid cannot match any stored invitation
        let Ok(uuid) = Uuid::parse_str(&key) else {
            debug!(key = %key, "Lookup key is not a uuid");
            return Err(DomainError::InvitationNotFound.into());
        };

        let invitation = self
            .ctx
            .invitation_repo()
            .find_by_uuid(uuid)
            .await?
            .ok_or(DomainError::InvitationNotFound)?;

        Ok(InvitationResponse::from(invitation))
    }

    /// Get an invitation by its short code (case-insensitive)
    #[instrument(skip(self))]
    pub async fn get_by_short_code(&self, short_code: &str) -> ServiceResult<InvitationResponse> {
        let invitation = self
            .find_by_short_code(short_code)
            .await?
            .ok_or(DomainError::InvitationNotFound)?;

        Ok(InvitationResponse::from(invitation))
    }

    /// Resolve a short code to the path of the invitation page
    #[instrument(skip(self))]
    pub async fn resolve_short_code(&self, short_code: &str) -> ServiceResult<String> {
        let invitation = self
            .find_by_short_code(short_code)
            .await?
            .ok_or(DomainError::ShortLinkNotFound)?;

        Ok(invitation.page_path())
    }

    /// Apply a partial update to an existing invitation
    #[instrument(skip(self, request))]
    pub async fn update_invitation(
        &self,
        key: &str,
        request: UpdateInvitationRequest,
    ) -> ServiceResult<InvitationResponse> {
        let key = required(key, "UUID is required")?;
        let groom_name =
            required_if_present(request.groom_name.as_deref(), "Groom name is required")?;
        let bride_name =
            required_if_present(request.bride_name.as_deref(), "Bride name is required")?;
        let event_location = required_if_present(
            request.event_location.as_deref(),
            "Event location is required",
        )?;
        let event_date = request
            .event_date
            .as_deref()
            .map(parse_event_date)
            .transpose()?;

        let Ok(uuid) = Uuid::parse_str(&key) else {
            return Err(DomainError::InvitationNotFound.into());
        };

        let mut invitation = self
            .ctx
            .invitation_repo()
            .find_by_uuid(uuid)
            .await?
            .ok_or(DomainError::InvitationNotFound)?;

        if let Some(groom_name) = groom_name {
            invitation.groom_name = groom_name;
        }
        if let Some(bride_name) = bride_name {
            invitation.bride_name = bride_name;
        }
        if let Some(event_location) = event_location {
            invitation.event_location = event_location;
        }
        if let Some(event_date) = event_date {
            invitation.event_date = event_date;
        }
        if let Some(phone_number) = request.phone_number {
            invitation.phone_number = phone_number.trim().to_string();
        }
        if let Some(template_code) = request.template_code {
            invitation.template_code = template_code.trim().to_string();
        }
        if let Some(lang) = request.lang {
            invitation.lang = lang;
        }
        if let Some(content) = request.content {
            invitation.content = content;
        }
        invitation.touch();

        self.ctx.invitation_repo().update(&invitation).await?;

        info!(uuid = %invitation.uuid, "Invitation updated");

        Ok(InvitationResponse::from(invitation))
    }

    async fn find_by_short_code(&self, short_code: &str) -> ServiceResult<Option<Invitation>> {
        let short_code = required(short_code, "Short code is required")?;
        let invitation = self
            .ctx
            .invitation_repo()
            .find_by_short_code(&normalize_short_code(&short_code))
            .await?;
        Ok(invitation)
    }

    fn created_response(&self, invitation: Invitation) -> CreateInvitationResponse {
        let links = self.ctx.links();
        CreateInvitationResponse {
            success: true,
            uuid: invitation.uuid,
            short_code: invitation.short_code.clone(),
            link: links.absolute(&invitation.page_path()),
            short_link: links.absolute(&invitation.short_link_path()),
            invitation: InvitationResponse::from(invitation),
        }
    }
}
