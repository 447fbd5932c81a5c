//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in wedding-core.

mod admin;
mod error;
mod invitation;

pub use admin::PgAdminRepository;
pub use invitation::PgInvitationRepository;
