//! RSVP service
//!
//! Records guest responses. Every submission is stored as its own row;
//! repeated answers from the same guest are kept side by side.

use tracing::{info, instrument};
use uuid::Uuid;
use wedding_core::entities::NewRsvp;
use wedding_core::DomainError;

use crate::dto::{SubmitRsvpRequest, SuccessResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::validation::required;

/// RSVP service
pub struct RsvpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RsvpService<'a> {
    /// Create a new RsvpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a guest response for the invitation identified by `invitation_key`
    #[instrument(skip(self, request), fields(attendance = %request.attendance.as_str()))]
    pub async fn submit_rsvp(
        &self,
        invitation_key: &str,
        request: SubmitRsvpRequest,
    ) -> ServiceResult<SuccessResponse> {
        let guest_name = required(&request.guest_name, "Guest name is required")?;
        if request.guest_count < 0 {
            return Err(ServiceError::validation("Guest count cannot be negative"));
        }

        let Ok(invitation_uuid) = Uuid::parse_str(invitation_key.trim()) else {
            return Err(DomainError::InvitationNotFound.into());
        };

        // The foreign key still guards the insert if the row vanishes in between
        self.ctx
            .invitation_repo()
            .find_by_uuid(invitation_uuid)
            .await?
            .ok_or(DomainError::InvitationNotFound)?;

        let rsvp = NewRsvp::new(
            invitation_uuid,
            guest_name,
            request.attendance,
            request.guest_count,
        );
        let saved = self.ctx.invitation_repo().add_rsvp(&rsvp).await?;

        info!(
            rsvp_id = saved.id,
            invitation_uuid = %invitation_uuid,
            guest_count = saved.guest_count,
            "RSVP recorded"
        );

        Ok(SuccessResponse::ok())
    }
}

#[cfg(test)]
mod tests {
    use wedding_core::{Attendance, ErrorKind};

    use super::*;
    use crate::dto::CreateInvitationRequest;
    use crate::services::invitation::InvitationService;
    use crate::services::test_support::TestContext;

    async fn create_invitation(test: &TestContext) -> Uuid {
        InvitationService::new(&test.ctx)
            .create_invitation(CreateInvitationRequest {
                groom_name: "Arman".to_string(),
                bride_name: "Aruzhan".to_string(),
                event_date: "2026-06-15".to_string(),
                event_location: "Astana".to_string(),
                ..Default::default()
            })
            .await
            .unwrap()
            .uuid
    }

    fn rsvp(guest_name: &str, attendance: Attendance, guest_count: i32) -> SubmitRsvpRequest {
        SubmitRsvpRequest {
            guest_name: guest_name.to_string(),
            attendance,
            guest_count,
        }
    }

    #[tokio::test]
    async fn test_submit_rsvp() {
        let test = TestContext::new();
        let uuid = create_invitation(&test).await;
        let service = RsvpService::new(&test.ctx);

        let response = service
            .submit_rsvp(&uuid.to_string(), rsvp(" John Doe ", Attendance::Yes, 2))
            .await
            .unwrap();
        assert!(response.success);

        let stored = test.store.rsvps_for(uuid);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].guest_name, "John Doe");
        assert_eq!(stored[0].guest_count, 2);
    }

    #[tokio::test]
    async fn test_declined_rsvp_stores_zero_guests() {
        let test = TestContext::new();
        let uuid = create_invitation(&test).await;

        RsvpService::new(&test.ctx)
            .submit_rsvp(&uuid.to_string(), rsvp("Dana", Attendance::No, 3))
            .await
            .unwrap();

        assert_eq!(test.store.rsvps_for(uuid)[0].guest_count, 0);
    }

    #[tokio::test]
    async fn test_repeated_submissions_are_not_deduplicated() {
        let test = TestContext::new();
        let uuid = create_invitation(&test).await;
        let service = RsvpService::new(&test.ctx);

        for _ in 0..3 {
            service
                .submit_rsvp(&uuid.to_string(), rsvp("John", Attendance::Yes, 1))
                .await
                .unwrap();
        }

        assert_eq!(test.store.rsvps_for(uuid).len(), 3);
    }

    #[tokio::test]
    async fn test_negative_count_fails_before_repository() {
        let test = TestContext::new();
        let service = RsvpService::new(&test.ctx);

        let err = service
            .submit_rsvp(&Uuid::new_v4().to_string(), rsvp("John", Attendance::Yes, -1))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Guest count cannot be negative");
        assert_eq!(test.repo_calls(), 0);
    }

    #[tokio::test]
    async fn test_guest_name_checked_first() {
        let test = TestContext::new();
        let service = RsvpService::new(&test.ctx);

        let err = service
            .submit_rsvp("", rsvp("  ", Attendance::Yes, -1))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Guest name is required");
        assert_eq!(test.repo_calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_invitation_inserts_nothing() {
        let test = TestContext::new();
        let service = RsvpService::new(&test.ctx);

        let err = service
            .submit_rsvp(&Uuid::new_v4().to_string(), rsvp("John", Attendance::Yes, 1))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Invitation not found");

        let err = service
            .submit_rsvp("bogus", rsvp("John", Attendance::Maybe, 1))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        assert_eq!(test.store.rsvp_count(), 0);
    }
}
