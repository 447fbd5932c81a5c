//! Entity to model mappers
//!
//! Conversions between domain entities (wedding-core) and database models.
//! - `From<Model> for Entity`: convert database rows to domain objects
//! - `*Insert` structs: prepare entity data for database writes

mod invitation;
mod rsvp;
mod template;

pub use invitation::{content_from_json, InvitationInsert};
pub use rsvp::RsvpInsert;
