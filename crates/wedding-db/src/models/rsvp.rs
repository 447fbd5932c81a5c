//! RSVP database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for rsvp_responses table
#[derive(Debug, Clone, FromRow)]
pub struct RsvpModel {
    pub id: i64,
    pub invitation_uuid: Uuid,
    pub guest_name: String,
    pub attendance: String,
    pub guest_count: i32,
    pub created_at: DateTime<Utc>,
}
