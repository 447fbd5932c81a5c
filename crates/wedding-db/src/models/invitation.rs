//! Invitation database models

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for invitations table
#[derive(Debug, Clone, FromRow)]
pub struct InvitationModel {
    pub uuid: Uuid,
    pub short_code: String,
    pub phone_number: String,
    pub template_code: String,
    pub lang: String,
    pub groom_name: String,
    pub bride_name: String,
    pub event_date: DateTime<Utc>,
    pub event_location: String,
    pub content: Json<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Invitation row joined with its template name and RSVP aggregates
#[derive(Debug, Clone, FromRow)]
pub struct InvitationStatsModel {
    #[sqlx(flatten)]
    pub invitation: InvitationModel,
    pub template_name: String,
    pub rsvp_count: i64,
    pub approved_guests: i64,
}
