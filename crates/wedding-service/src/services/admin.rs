//! Admin service
//!
//! Handles administrator login, session verification and the dashboard views.

use tracing::{debug, info, instrument, warn};
use wedding_core::DomainError;

use crate::dto::{
    AdminInvitationResponse, AdminLoginRequest, LoginResponse, StatsResponse, TemplateResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Administrator resolved from a valid session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub username: String,
}

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Exchange administrator credentials for a session token
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: AdminLoginRequest) -> ServiceResult<LoginResponse> {
        if request.username.is_empty() || request.password.is_empty() {
            return Err(ServiceError::validation("Credentials required"));
        }

        let credentials = self.ctx.admin_credentials();
        if !credentials.verify(&request.username, &request.password)? {
            warn!("Admin login failed: invalid credentials");
            return Err(DomainError::InvalidCredentials.into());
        }

        let session = self.ctx.jwt_service().issue(credentials.username())?;

        info!("Admin logged in");

        Ok(LoginResponse {
            success: true,
            token: session.token,
            expires_in: session.expires_in,
        })
    }

    /// Verify a session token.
    ///
    /// Any failure, including a token issued for another username, is reported
    /// as `Unauthorized`.
    #[instrument(skip(self, token))]
    pub fn authenticate(&self, token: &str) -> ServiceResult<AdminIdentity> {
        let claims = self.ctx.jwt_service().verify(token).map_err(|e| {
            debug!(error = %e, "Rejected admin session");
            ServiceError::from(DomainError::Unauthorized)
        })?;

        if claims.username != self.ctx.admin_credentials().username() {
            debug!("Session token names an unknown administrator");
            return Err(DomainError::Unauthorized.into());
        }

        Ok(AdminIdentity {
            username: claims.username,
        })
    }

    /// Session lifetime in seconds, for cookie expiry
    pub fn session_ttl(&self) -> i64 {
        self.ctx.jwt_service().session_ttl()
    }

    /// All invitations, newest first, with RSVP aggregates
    #[instrument(skip(self))]
    pub async fn list_invitations(&self) -> ServiceResult<Vec<AdminInvitationResponse>> {
        let rows = self.ctx.admin_repo().list_invitations_with_stats().await?;
        Ok(rows.into_iter().map(AdminInvitationResponse::from).collect())
    }

    /// Dashboard totals
    #[instrument(skip(self))]
    pub async fn stats(&self) -> ServiceResult<StatsResponse> {
        let stats = self.ctx.admin_repo().stats().await?;
        Ok(StatsResponse::from(stats))
    }

    /// Active templates
    #[instrument(skip(self))]
    pub async fn templates(&self) -> ServiceResult<Vec<TemplateResponse>> {
        let templates = self.ctx.admin_repo().active_templates().await?;
        Ok(templates.into_iter().map(TemplateResponse::from).collect())
    }
}
