//! Service context - dependency container for services
//!
//! Holds the repositories, the session issuer, the administrator credentials
//! and link settings. Everything is constructed at startup and injected here;
//! services never reach for globals.

use std::sync::Arc;

use wedding_common::{AdminCredentials, JwtService, LinkConfig};
use wedding_core::traits::{AdminRepository, InvitationRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    invitation_repo: Arc<dyn InvitationRepository>,
    admin_repo: Arc<dyn AdminRepository>,

    // Admin sessions
    jwt_service: Arc<JwtService>,
    admin_credentials: Arc<AdminCredentials>,

    // Public links
    links: Arc<LinkConfig>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        invitation_repo: Arc<dyn InvitationRepository>,
        admin_repo: Arc<dyn AdminRepository>,
        jwt_service: Arc<JwtService>,
        admin_credentials: Arc<AdminCredentials>,
        links: Arc<LinkConfig>,
    ) -> Self {
        Self {
            invitation_repo,
            admin_repo,
            jwt_service,
            admin_credentials,
            links,
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the invitation repository
    pub fn invitation_repo(&self) -> &dyn InvitationRepository {
        self.invitation_repo.as_ref()
    }

    /// Get the admin (read model) repository
    pub fn admin_repo(&self) -> &dyn AdminRepository {
        self.admin_repo.as_ref()
    }

    // === Admin sessions ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the administrator credentials
    pub fn admin_credentials(&self) -> &AdminCredentials {
        self.admin_credentials.as_ref()
    }

    // === Links ===

    /// Get the public link settings
    pub fn links(&self) -> &LinkConfig {
        self.links.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .field("admin_credentials", &self.admin_credentials)
            .field("links", &self.links)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    invitation_repo: Option<Arc<dyn InvitationRepository>>,
    admin_repo: Option<Arc<dyn AdminRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    admin_credentials: Option<Arc<AdminCredentials>>,
    links: Option<Arc<LinkConfig>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invitation_repo(mut self, repo: Arc<dyn InvitationRepository>) -> Self {
        self.invitation_repo = Some(repo);
        self
    }

    pub fn admin_repo(mut self, repo: Arc<dyn AdminRepository>) -> Self {
        self.admin_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn admin_credentials(mut self, credentials: Arc<AdminCredentials>) -> Self {
        self.admin_credentials = Some(credentials);
        self
    }

    pub fn links(mut self, links: Arc<LinkConfig>) -> Self {
        self.links = Some(links);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.invitation_repo
                .ok_or_else(|| ServiceError::internal("invitation_repo is required"))?,
            self.admin_repo
                .ok_or_else(|| ServiceError::internal("admin_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::internal("jwt_service is required"))?,
            self.admin_credentials
                .ok_or_else(|| ServiceError::internal("admin_credentials is required"))?,
            self.links
                .ok_or_else(|| ServiceError::internal("links is required"))?,
        ))
    }
}
