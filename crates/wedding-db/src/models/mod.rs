//! Database models - SQLx-compatible structs for PostgreSQL tables

mod invitation;
mod rsvp;
mod stats;
mod template;

pub use invitation::{InvitationModel, InvitationStatsModel};
pub use rsvp::RsvpModel;
pub use stats::StatsModel;
pub use template::TemplateModel;
