//! RSVP entities - a guest's response to one invitation

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Attendance;

/// Stored RSVP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpResponse {
    pub id: i64,
    pub invitation_uuid: Uuid,
    pub guest_name: String,
    pub attendance: Attendance,
    pub guest_count: i32,
    pub created_at: DateTime<Utc>,
}

/// RSVP about to be stored; the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRsvp {
    pub invitation_uuid: Uuid,
    pub guest_name: String,
    pub attendance: Attendance,
    pub guest_count: i32,
}

impl NewRsvp {
    /// Create a new RSVP. A declined answer always stores a zero headcount.
    pub fn new(
        invitation_uuid: Uuid,
        guest_name: String,
        attendance: Attendance,
        guest_count: i32,
    ) -> Self {
        Self {
            invitation_uuid,
            guest_name,
            attendance,
            guest_count: attendance.normalize_guest_count(guest_count),
        }
    }
}
