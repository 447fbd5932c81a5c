//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] and implements one group of use cases.

pub mod admin;
pub mod context;
pub mod error;
pub mod invitation;
pub mod rsvp;

mod validation;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use admin::{AdminIdentity, AdminService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use invitation::InvitationService;
pub use rsvp::RsvpService;
