//! Domain entities - core business objects

mod invitation;
mod rsvp;
mod stats;
mod template;

pub use invitation::{Invitation, InvitationContent};
pub use rsvp::{NewRsvp, RsvpResponse};
pub use stats::{AdminStats, InvitationWithStats};
pub use template::{Template, TemplateNames};
