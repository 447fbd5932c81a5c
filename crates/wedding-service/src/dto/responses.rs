//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use wedding_core::{InvitationContent, Lang};

// ============================================================================
// Common Response Types
// ============================================================================

/// `{ "success": true }`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// ============================================================================
// Invitation Responses
// ============================================================================

/// Full invitation, as shown on the public page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationResponse {
    pub uuid: Uuid,
    pub short_code: String,
    pub phone_number: String,
    pub template_code: String,
    pub lang: Lang,
    pub groom_name: String,
    pub bride_name: String,
    pub event_date: DateTime<Utc>,
    pub event_location: String,
    pub content: InvitationContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of creating an invitation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationResponse {
    pub success: bool,
    pub uuid: Uuid,
    pub short_code: String,
    /// Absolute URL of the public page
    pub link: String,
    /// Absolute URL of the short redirect
    pub short_link: String,
    pub invitation: InvitationResponse,
}

// ============================================================================
// Admin Responses
// ============================================================================

/// Successful admin login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    /// Session lifetime in seconds
    pub expires_in: i64,
}

/// Invitation row of the admin listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminInvitationResponse {
    #[serde(flatten)]
    pub invitation: InvitationResponse,
    pub template_name: String,
    pub rsvp_count: i64,
    pub approved_guests: i64,
}

/// Dashboard totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_invitations: i64,
    #[serde(rename = "totalRSVPs")]
    pub total_rsvps: i64,
    pub total_guests: i64,
}

/// Active template with its localized names
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateResponse {
    pub code: String,
    /// Russian display name
    pub name: String,
    pub name_ru: String,
    pub name_kk: Option<String>,
    pub name_en: Option<String>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status of each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_field_names() {
        let value = serde_json::to_value(StatsResponse {
            total_invitations: 2,
            total_rsvps: 3,
            total_guests: 5,
        })
        .unwrap();

        assert_eq!(value["totalInvitations"], 2);
        assert_eq!(value["totalRSVPs"], 3);
        assert_eq!(value["totalGuests"], 5);
    }

    #[test]
    fn test_success_response() {
        let value = serde_json::to_value(SuccessResponse::ok()).unwrap();
        assert_eq!(value, serde_json::json!({"success": true}));
    }

    #[test]
    fn test_health_responses() {
        assert_eq!(HealthResponse::ok().status, "ok");

        let ready = ReadinessResponse::ready(true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert!(!not_ready.is_ready());
        assert_eq!(not_ready.checks.database, "unhealthy");
    }
}
