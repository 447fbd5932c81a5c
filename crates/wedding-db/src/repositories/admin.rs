//! PostgreSQL implementation of AdminRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use wedding_core::entities::{AdminStats, InvitationWithStats, Template};
use wedding_core::traits::{AdminRepository, RepoResult};

use crate::models::{InvitationStatsModel, StatsModel, TemplateModel};

use super::error::map_db_error;

/// PostgreSQL implementation of AdminRepository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    /// Create a new PgAdminRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    #[instrument(skip(self))]
    async fn list_invitations_with_stats(&self) -> RepoResult<Vec<InvitationWithStats>> {
        let rows = sqlx::query_as::<_, InvitationStatsModel>(
            r#"
            SELECT i.uuid, i.short_code, i.phone_number, i.template_code, i.lang,
                   i.groom_name, i.bride_name, i.event_date, i.event_location,
                   i.content, i.created_at, i.updated_at,
                   COALESCE(
                       NULLIF(TRIM(CASE i.lang
                           WHEN 'kk' THEN t.name_kk
                           WHEN 'en' THEN t.name_en
                           ELSE t.name_ru
                       END), ''),
                       i.template_code
                   ) AS template_name,
                   COUNT(r.id) AS rsvp_count,
                   COALESCE(SUM(r.guest_count) FILTER (WHERE r.attendance = 'yes'), 0)::BIGINT
                       AS approved_guests
            FROM invitations i
            LEFT JOIN templates t ON t.code = i.template_code
            LEFT JOIN rsvp_responses r ON r.invitation_uuid = i.uuid
            GROUP BY i.uuid, t.name_ru, t.name_kk, t.name_en
            ORDER BY i.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(InvitationWithStats::from).collect())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> RepoResult<AdminStats> {
        let row = sqlx::query_as::<_, StatsModel>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM invitations) AS total_invitations,
                (SELECT COUNT(*) FROM rsvp_responses) AS total_rsvps,
                (SELECT COALESCE(SUM(guest_count), 0)::BIGINT
                 FROM rsvp_responses
                 WHERE attendance = 'yes') AS total_guests
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(AdminStats::from(row))
    }

    #[instrument(skip(self))]
    async fn active_templates(&self) -> RepoResult<Vec<Template>> {
        let rows = sqlx::query_as::<_, TemplateModel>(
            r#"
            SELECT code, name_ru, name_kk, name_en, is_active
            FROM templates
            WHERE is_active = TRUE
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Template::from).collect())
    }
}
