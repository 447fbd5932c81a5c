//! Invitation entity <-> model mappers

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use uuid::Uuid;
use wedding_core::entities::{AdminStats, Invitation, InvitationContent, InvitationWithStats};

use crate::models::{InvitationModel, InvitationStatsModel, StatsModel};

/// Stored content that is not a JSON object reads back as an empty document
pub fn content_from_json(value: serde_json::Value) -> InvitationContent {
    match value {
        serde_json::Value::Object(map) => map,
        _ => InvitationContent::new(),
    }
}

/// Convert InvitationModel to Invitation entity
impl From<InvitationModel> for Invitation {
    fn from(model: InvitationModel) -> Self {
        Invitation {
            uuid: model.uuid,
            short_code: model.short_code,
            phone_number: model.phone_number,
            template_code: model.template_code,
            // Legacy rows may carry a language outside the supported set.
            lang: model.lang.parse().unwrap_or_default(),
            groom_name: model.groom_name,
            bride_name: model.bride_name,
            event_date: model.event_date,
            event_location: model.event_location,
            content: content_from_json(model.content.0),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<InvitationStatsModel> for InvitationWithStats {
    fn from(model: InvitationStatsModel) -> Self {
        InvitationWithStats {
            invitation: Invitation::from(model.invitation),
            template_name: model.template_name,
            rsvp_count: model.rsvp_count,
            approved_guests: model.approved_guests,
        }
    }
}

impl From<StatsModel> for AdminStats {
    fn from(model: StatsModel) -> Self {
        AdminStats {
            total_invitations: model.total_invitations,
            total_rsvps: model.total_rsvps,
            total_guests: model.total_guests,
        }
    }
}

/// Invitation values for INSERT and UPDATE statements
pub struct InvitationInsert<'a> {
    pub uuid: Uuid,
    pub short_code: &'a str,
    pub phone_number: &'a str,
    pub template_code: &'a str,
    pub lang: &'static str,
    pub groom_name: &'a str,
    pub bride_name: &'a str,
    pub event_date: DateTime<Utc>,
    pub event_location: &'a str,
    pub content: Json<&'a InvitationContent>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> InvitationInsert<'a> {
    pub fn new(invitation: &'a Invitation) -> Self {
        Self {
            uuid: invitation.uuid,
            short_code: &invitation.short_code,
            phone_number: &invitation.phone_number,
            template_code: &invitation.template_code,
            lang: invitation.lang.as_str(),
            groom_name: &invitation.groom_name,
            bride_name: &invitation.bride_name,
            event_date: invitation.event_date,
            event_location: &invitation.event_location,
            content: Json(&invitation.content),
            created_at: invitation.created_at,
            updated_at: invitation.updated_at,
        }
    }
}
