//! Read models for the admin dashboard

use super::Invitation;

/// Invitation with RSVP aggregates computed on read
#[derive(Debug, Clone, PartialEq)]
pub struct InvitationWithStats {
    pub invitation: Invitation,
    /// Template name in the invitation's language, or the template code
    pub template_name: String,
    pub rsvp_count: i64,
    /// Sum of guest counts over confirmed RSVPs
    pub approved_guests: i64,
}

/// Totals across all invitations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminStats {
    pub total_invitations: i64,
    pub total_rsvps: i64,
    /// Sum of guest counts over confirmed RSVPs
    pub total_guests: i64,
}
