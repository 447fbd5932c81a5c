//! RSVP entity <-> model mappers

use uuid::Uuid;
use wedding_core::entities::{NewRsvp, RsvpResponse};
use wedding_core::error::DomainError;

use crate::models::RsvpModel;

impl TryFrom<RsvpModel> for RsvpResponse {
    type Error = DomainError;

    fn try_from(model: RsvpModel) -> Result<Self, Self::Error> {
        let attendance = model
            .attendance
            .parse()
            .map_err(|e| DomainError::Database(format!("corrupt rsvp row {}: {e}", model.id)))?;

        Ok(RsvpResponse {
            id: model.id,
            invitation_uuid: model.invitation_uuid,
            guest_name: model.guest_name,
            attendance,
            guest_count: model.guest_count,
            created_at: model.created_at,
        })
    }
}

/// RSVP values for INSERT statements
pub struct RsvpInsert<'a> {
    pub invitation_uuid: Uuid,
    pub guest_name: &'a str,
    pub attendance: &'static str,
    pub guest_count: i32,
}

impl<'a> RsvpInsert<'a> {
    pub fn new(rsvp: &'a NewRsvp) -> Self {
        Self {
            invitation_uuid: rsvp.invitation_uuid,
            guest_name: &rsvp.guest_name,
            attendance: rsvp.attendance.as_str(),
            guest_count: rsvp.guest_count,
        }
    }
}
