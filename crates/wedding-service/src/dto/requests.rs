//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate`. `Validate` only
//! bounds field sizes; required-field checks belong to the use cases so that
//! their messages and order stay in one place. Required text fields therefore
//! default to empty instead of failing deserialization.

use serde::Deserialize;
use validator::Validate;
use wedding_core::{Attendance, InvitationContent, Lang};

// ============================================================================
// Invitation Requests
// ============================================================================

/// Create invitation request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    #[serde(default)]
    #[validate(length(max = 50, message = "Phone number must be at most 50 characters"))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 50, message = "Template code must be 1-50 characters"))]
    pub template_code: Option<String>,

    pub lang: Option<Lang>,

    #[serde(default)]
    #[validate(length(max = 255, message = "Groom name must be at most 255 characters"))]
    pub groom_name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Bride name must be at most 255 characters"))]
    pub bride_name: String,

    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    #[serde(default)]
    pub event_date: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Event location must be at most 255 characters"))]
    pub event_location: String,

    pub content: Option<InvitationContent>,
}

/// Partial invitation update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvitationRequest {
    #[validate(length(max = 50, message = "Phone number must be at most 50 characters"))]
    pub phone_number: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Template code must be 1-50 characters"))]
    pub template_code: Option<String>,

    pub lang: Option<Lang>,

    #[validate(length(max = 255, message = "Groom name must be at most 255 characters"))]
    pub groom_name: Option<String>,

    #[validate(length(max = 255, message = "Bride name must be at most 255 characters"))]
    pub bride_name: Option<String>,

    pub event_date: Option<String>,

    #[validate(length(max = 255, message = "Event location must be at most 255 characters"))]
    pub event_location: Option<String>,

    /// Replaces the whole document
    pub content: Option<InvitationContent>,
}

// ============================================================================
// RSVP Requests
// ============================================================================

/// Guest response to an invitation
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRsvpRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Guest name must be at most 255 characters"))]
    pub guest_name: String,

    pub attendance: Attendance,

    #[serde(default)]
    pub guest_count: i32,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Admin login request
#[derive(Clone, Default, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[serde(default)]
    #[validate(length(max = 255, message = "Username must be at most 255 characters"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(max = 1024, message = "Password must be at most 1024 characters"))]
    pub password: String,
}

impl std::fmt::Debug for AdminLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminLoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
