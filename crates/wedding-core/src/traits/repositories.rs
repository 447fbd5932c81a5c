//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{AdminStats, Invitation, InvitationWithStats, NewRsvp, RsvpResponse, Template};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Invitation Repository
// ============================================================================

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Find invitation by UUID
    async fn find_by_uuid(&self, uuid: Uuid) -> RepoResult<Option<Invitation>>;

    /// Find invitation by its (normalized) short code
    async fn find_by_short_code(&self, short_code: &str) -> RepoResult<Option<Invitation>>;

    /// Insert a new invitation.
    ///
    /// A taken short code fails with [`DomainError::ShortCodeConflict`].
    async fn create(&self, invitation: &Invitation) -> RepoResult<()>;

    /// Persist mutable fields of an existing invitation
    async fn update(&self, invitation: &Invitation) -> RepoResult<()>;

    /// Append an RSVP response to an invitation
    async fn add_rsvp(&self, rsvp: &NewRsvp) -> RepoResult<RsvpResponse>;
}

// ============================================================================
// Admin Repository
// ============================================================================

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Every invitation with RSVP aggregates, newest first
    async fn list_invitations_with_stats(&self) -> RepoResult<Vec<InvitationWithStats>>;

    /// Totals across all invitations and RSVPs
    async fn stats(&self) -> RepoResult<AdminStats>;

    /// Templates with `is_active = true`
    async fn active_templates(&self) -> RepoResult<Vec<Template>>;
}
