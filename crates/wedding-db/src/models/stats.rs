//! Aggregate row for the admin dashboard

use sqlx::FromRow;

#[derive(Debug, Clone, Copy, FromRow)]
pub struct StatsModel {
    pub total_invitations: i64,
    pub total_rsvps: i64,
    pub total_guests: i64,
}
