//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod health;
pub mod invitations;
pub mod rsvp;
pub mod short_links;
