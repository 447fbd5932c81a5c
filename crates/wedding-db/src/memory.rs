//! In-memory repositories
//!
//! A single store implementing both repository traits over `parking_lot` locks.
//! It enforces the same uniqueness and referential rules as the PostgreSQL schema,
//! which makes it suitable for tests and for running the API without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use wedding_core::entities::{
    AdminStats, Invitation, InvitationWithStats, NewRsvp, RsvpResponse, Template,
};
use wedding_core::error::DomainError;
use wedding_core::traits::{AdminRepository, InvitationRepository, RepoResult};

#[derive(Debug, Default)]
struct State {
    /// Insertion order, oldest first
    invitations: Vec<Invitation>,
    by_uuid: HashMap<Uuid, usize>,
    by_short_code: HashMap<String, usize>,
    rsvps: Vec<RsvpResponse>,
    templates: Vec<Template>,
    next_rsvp_id: i64,
}

/// In-memory invitation, RSVP and template store
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    /// Create a store seeded with the default template
    pub fn new() -> Self {
        Self::with_templates(vec![Template::new(
            Invitation::DEFAULT_TEMPLATE.to_string(),
            "Звездная ночь".to_string(),
        )
        .with_names(
            Some("Жұлдызды түн".to_string()),
            Some("Starry Night".to_string()),
        )])
    }

    /// Create a store with the given template catalog
    pub fn with_templates(templates: Vec<Template>) -> Self {
        let store = Self::default();
        store.state.write().templates = templates;
        store
    }

    /// Number of stored invitations
    pub fn invitation_count(&self) -> usize {
        self.state.read().invitations.len()
    }

    /// Number of stored RSVP responses
    pub fn rsvp_count(&self) -> usize {
        self.state.read().rsvps.len()
    }

    /// RSVP responses of one invitation, oldest first
    pub fn rsvps_for(&self, invitation_uuid: Uuid) -> Vec<RsvpResponse> {
        self.state
            .read()
            .rsvps
            .iter()
            .filter(|r| r.invitation_uuid == invitation_uuid)
            .cloned()
            .collect()
    }

    /// Remove all invitations and RSVPs, keeping the template catalog
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.invitations.clear();
        state.by_uuid.clear();
        state.by_short_code.clear();
        state.rsvps.clear();
    }
}

#[async_trait]
impl InvitationRepository for InMemoryStore {
    async fn find_by_uuid(&self, uuid: Uuid) -> RepoResult<Option<Invitation>> {
        let state = self.state.read();
        Ok(state.by_uuid.get(&uuid).map(|&i| state.invitations[i].clone()))
    }

    async fn find_by_short_code(&self, short_code: &str) -> RepoResult<Option<Invitation>> {
        let state = self.state.read();
        Ok(state
            .by_short_code
            .get(short_code)
            .map(|&i| state.invitations[i].clone()))
    }

    async fn create(&self, invitation: &Invitation) -> RepoResult<()> {
        let mut state = self.state.write();

        if state.by_short_code.contains_key(&invitation.short_code) {
            return Err(DomainError::ShortCodeConflict);
        }
        if state.by_uuid.contains_key(&invitation.uuid) {
            return Err(DomainError::Database(format!(
                "duplicate invitation uuid {}",
                invitation.uuid
            )));
        }

        let index = state.invitations.len();
        state.by_uuid.insert(invitation.uuid, index);
        state
            .by_short_code
            .insert(invitation.short_code.clone(), index);
        state.invitations.push(invitation.clone());

        Ok(())
    }

    async fn update(&self, invitation: &Invitation) -> RepoResult<()> {
        let mut state = self.state.write();

        let index = *state
            .by_uuid
            .get(&invitation.uuid)
            .ok_or(DomainError::InvitationNotFound)?;

        // uuid, short code and creation time are immutable
        let stored = &mut state.invitations[index];
        let (uuid, short_code, created_at) =
            (stored.uuid, stored.short_code.clone(), stored.created_at);
        *stored = Invitation {
            uuid,
            short_code,
            created_at,
            ..invitation.clone()
        };

        Ok(())
    }

    async fn add_rsvp(&self, rsvp: &NewRsvp) -> RepoResult<RsvpResponse> {
        let mut state = self.state.write();

        if !state.by_uuid.contains_key(&rsvp.invitation_uuid) {
            return Err(DomainError::InvitationNotFound);
        }
        if rsvp.guest_count < 0 {
            return Err(DomainError::Database(
                "guest_count violates check constraint".to_string(),
            ));
        }

        state.next_rsvp_id += 1;
        let stored = RsvpResponse {
            id: state.next_rsvp_id,
            invitation_uuid: rsvp.invitation_uuid,
            guest_name: rsvp.guest_name.clone(),
            attendance: rsvp.attendance,
            guest_count: rsvp.guest_count,
            created_at: Utc::now(),
        };
        state.rsvps.push(stored.clone());

        Ok(stored)
    }
}

#[async_trait]
impl AdminRepository for InMemoryStore {
    async fn list_invitations_with_stats(&self) -> RepoResult<Vec<InvitationWithStats>> {
        let state = self.state.read();

        let mut rows: Vec<InvitationWithStats> = state
            .invitations
            .iter()
            .rev()
            .map(|invitation| {
                let rsvps = state
                    .rsvps
                    .iter()
                    .filter(|r| r.invitation_uuid == invitation.uuid);

                let (rsvp_count, approved_guests) =
                    rsvps.fold((0_i64, 0_i64), |(count, guests), r| {
                        let confirmed = if r.attendance.is_confirmed() {
                            i64::from(r.guest_count)
                        } else {
                            0
                        };
                        (count + 1, guests + confirmed)
                    });

                let template_name = state
                    .templates
                    .iter()
                    .find(|t| t.code == invitation.template_code)
                    .map_or(invitation.template_code.as_str(), |t| {
                        t.display_name(invitation.lang)
                    })
                    .to_string();

                InvitationWithStats {
                    invitation: invitation.clone(),
                    template_name,
                    rsvp_count,
                    approved_guests,
                }
            })
            .collect();

        // Stable sort keeps newest-inserted first among equal timestamps.
        rows.sort_by(|a, b| b.invitation.created_at.cmp(&a.invitation.created_at));

        Ok(rows)
    }

    async fn stats(&self) -> RepoResult<AdminStats> {
        let state = self.state.read();

        Ok(AdminStats {
            total_invitations: state.invitations.len() as i64,
            total_rsvps: state.rsvps.len() as i64,
            total_guests: state
                .rsvps
                .iter()
                .filter(|r| r.attendance.is_confirmed())
                .map(|r| i64::from(r.guest_count))
                .sum(),
        })
    }

    async fn active_templates(&self) -> RepoResult<Vec<Template>> {
        Ok(self
            .state
            .read()
            .templates
            .iter()
            .filter(|t| t.is_active)
            .cloned()
            .collect())
    }
}
