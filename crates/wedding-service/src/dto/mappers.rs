//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use wedding_core::entities::{AdminStats, Invitation, InvitationWithStats, Template};

use super::responses::{
    AdminInvitationResponse, InvitationResponse, StatsResponse, TemplateResponse,
};

impl From<Invitation> for InvitationResponse {
    fn from(invitation: Invitation) -> Self {
        Self {
            uuid: invitation.uuid,
            short_code: invitation.short_code,
            phone_number: invitation.phone_number,
            template_code: invitation.template_code,
            lang: invitation.lang,
            groom_name: invitation.groom_name,
            bride_name: invitation.bride_name,
            event_date: invitation.event_date,
            event_location: invitation.event_location,
            content: invitation.content,
            created_at: invitation.created_at,
            updated_at: invitation.updated_at,
        }
    }
}

impl From<InvitationWithStats> for AdminInvitationResponse {
    fn from(row: InvitationWithStats) -> Self {
        Self {
            invitation: InvitationResponse::from(row.invitation),
            template_name: row.template_name,
            rsvp_count: row.rsvp_count,
            approved_guests: row.approved_guests,
        }
    }
}

impl From<AdminStats> for StatsResponse {
    fn from(stats: AdminStats) -> Self {
        Self {
            total_invitations: stats.total_invitations,
            total_rsvps: stats.total_rsvps,
            total_guests: stats.total_guests,
        }
    }
}

impl From<Template> for TemplateResponse {
    fn from(template: Template) -> Self {
        Self {
            code: template.code,
            name: template.names.ru.clone(),
            name_ru: template.names.ru,
            name_kk: template.names.kk,
            name_en: template.names.en,
        }
    }
}
