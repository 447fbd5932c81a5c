//! # wedding-service
//!
//! Application layer containing the invitation, RSVP and admin use cases and their DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AdminIdentity, AdminService, InvitationService, RsvpService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
