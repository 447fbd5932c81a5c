//! Shared fixtures for service tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;
use wedding_common::{AdminCredentials, JwtService, LinkConfig};
use wedding_core::entities::{Invitation, NewRsvp, RsvpResponse};
use wedding_core::traits::{InvitationRepository, RepoResult};
use wedding_db::InMemoryStore;

use super::context::ServiceContext;

pub(crate) const ADMIN_USERNAME: &str = "admin";
pub(crate) const ADMIN_PASSWORD: &str = "admin123";
pub(crate) const JWT_SECRET: &str = "test-secret";
pub(crate) const BASE_URL: &str = "http://localhost:3008";

/// Invitation repository that counts calls before delegating to the store
#[derive(Debug)]
pub(crate) struct CountingRepo {
    inner: InMemoryStore,
    calls: AtomicUsize,
}

impl CountingRepo {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl InvitationRepository for CountingRepo {
    async fn find_by_uuid(&self, uuid: Uuid) -> RepoResult<Option<Invitation>> {
        self.hit();
        self.inner.find_by_uuid(uuid).await
    }

    async fn find_by_short_code(&self, short_code: &str) -> RepoResult<Option<Invitation>> {
        self.hit();
        self.inner.find_by_short_code(short_code).await
    }

    async fn create(&self, invitation: &Invitation) -> RepoResult<()> {
        self.hit();
        self.inner.create(invitation).await
    }

    async fn update(&self, invitation: &Invitation) -> RepoResult<()> {
        self.hit();
        self.inner.update(invitation).await
    }

    async fn add_rsvp(&self, rsvp: &NewRsvp) -> RepoResult<RsvpResponse> {
        self.hit();
        self.inner.add_rsvp(rsvp).await
    }
}

/// Service context wired to an in-memory store
pub(crate) struct TestContext {
    pub(crate) ctx: ServiceContext,
    pub(crate) store: InMemoryStore,
    pub(crate) repo: Arc<CountingRepo>,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let store = InMemoryStore::new();
        let repo = Arc::new(CountingRepo {
            inner: store.clone(),
            calls: AtomicUsize::new(0),
        });
        let credentials = AdminCredentials::from_plaintext(ADMIN_USERNAME, ADMIN_PASSWORD)
            .expect("hash test password");

        let ctx = ServiceContext::new(
            repo.clone(),
            Arc::new(store.clone()),
            Arc::new(JwtService::new(JWT_SECRET, 86_400)),
            Arc::new(credentials),
            Arc::new(LinkConfig {
                public_base_url: BASE_URL.to_string(),
                private_api_key: Some("test-key".to_string()),
            }),
        );

        Self { ctx, store, repo }
    }

    /// Invitation repository calls made so far
    pub(crate) fn repo_calls(&self) -> usize {
        self.repo.calls()
    }
}
