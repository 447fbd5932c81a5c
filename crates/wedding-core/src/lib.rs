//! # wedding-core
//!
//! Domain layer containing invitation, RSVP and template entities, value objects,
//! the domain error taxonomy and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AdminStats, Invitation, InvitationContent, InvitationWithStats, NewRsvp, RsvpResponse,
    Template, TemplateNames,
};
pub use error::{DomainError, ErrorKind};
pub use traits::{AdminRepository, InvitationRepository, RepoResult};
pub use value_objects::{
    generate_short_code, normalize_short_code, parse_event_date, Attendance, Lang,
    ParseAttendanceError, ParseLangError, SHORT_CODE_LEN,
};
