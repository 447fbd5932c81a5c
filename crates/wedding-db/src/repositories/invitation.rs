//! PostgreSQL implementation of InvitationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use wedding_core::entities::{Invitation, NewRsvp, RsvpResponse};
use wedding_core::error::DomainError;
use wedding_core::traits::{InvitationRepository, RepoResult};

use crate::mappers::{InvitationInsert, RsvpInsert};
use crate::models::{InvitationModel, RsvpModel};

use super::error::{map_db_error, map_foreign_key_violation, map_unique_violation};

/// PostgreSQL implementation of InvitationRepository
#[derive(Clone)]
pub struct PgInvitationRepository {
    pool: PgPool,
}

impl PgInvitationRepository {
    /// Create a new PgInvitationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PgInvitationRepository {
    #[instrument(skip(self))]
    async fn find_by_uuid(&self, uuid: Uuid) -> RepoResult<Option<Invitation>> {
        let result = sqlx::query_as::<_, InvitationModel>(
            r#"
            SELECT uuid, short_code, phone_number, template_code, lang, groom_name,
                   bride_name, event_date, event_location, content, created_at, updated_at
            FROM invitations
            WHERE uuid = $1
            "#,
        )
        .bind(uuid)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Invitation::from))
    }

    #[instrument(skip(self))]
    async fn find_by_short_code(&self, short_code: &str) -> RepoResult<Option<Invitation>> {
        let result = sqlx::query_as::<_, InvitationModel>(
            r#"
            SELECT uuid, short_code, phone_number, template_code, lang, groom_name,
                   bride_name, event_date, event_location, content, created_at, updated_at
            FROM invitations
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Invitation::from))
    }

    #[instrument(skip(self, invitation), fields(uuid = %invitation.uuid))]
    async fn create(&self, invitation: &Invitation) -> RepoResult<()> {
        let insert = InvitationInsert::new(invitation);

        sqlx::query(
            r#"
            INSERT INTO invitations (uuid, short_code, phone_number, template_code, lang,
                                     groom_name, bride_name, event_date, event_location,
                                     content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(insert.uuid)
        .bind(insert.short_code)
        .bind(insert.phone_number)
        .bind(insert.template_code)
        .bind(insert.lang)
        .bind(insert.groom_name)
        .bind(insert.bride_name)
        .bind(insert.event_date)
        .bind(insert.event_location)
        .bind(insert.content)
        .bind(insert.created_at)
        .bind(insert.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ShortCodeConflict))?;

        Ok(())
    }

    #[instrument(skip(self, invitation), fields(uuid = %invitation.uuid))]
    async fn update(&self, invitation: &Invitation) -> RepoResult<()> {
        let update = InvitationInsert::new(invitation);

        let result = sqlx::query(
            r#"
            UPDATE invitations
            SET phone_number = $2, template_code = $3, lang = $4, groom_name = $5,
                bride_name = $6, event_date = $7, event_location = $8, content = $9,
                updated_at = $10
            WHERE uuid = $1
            "#,
        )
        .bind(update.uuid)
        .bind(update.phone_number)
        .bind(update.template_code)
        .bind(update.lang)
        .bind(update.groom_name)
        .bind(update.bride_name)
        .bind(update.event_date)
        .bind(update.event_location)
        .bind(update.content)
        .bind(update.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::InvitationNotFound);
        }

        Ok(())
    }

    #[instrument(skip(self, rsvp), fields(invitation_uuid = %rsvp.invitation_uuid))]
    async fn add_rsvp(&self, rsvp: &NewRsvp) -> RepoResult<RsvpResponse> {
        let insert = RsvpInsert::new(rsvp);

        let row = sqlx::query_as::<_, RsvpModel>(
            r#"
            INSERT INTO rsvp_responses (invitation_uuid, guest_name, attendance, guest_count)
            VALUES ($1, $2, $3, $4)
            RETURNING id, invitation_uuid, guest_name, attendance, guest_count, created_at
            "#,
        )
        .bind(insert.invitation_uuid)
        .bind(insert.guest_name)
        .bind(insert.attendance)
        .bind(insert.guest_count)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::InvitationNotFound))?;

        RsvpResponse::try_from(row)
    }
}
