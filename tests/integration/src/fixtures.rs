//! Test fixtures and data generators
//!
//! Provides reusable request bodies for integration tests.

use serde::Serialize;
use serde_json::Value;

/// Create invitation request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub groom_name: String,
    pub bride_name: String,
    pub event_date: String,
    pub event_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

impl CreateInvitation {
    /// The Arman and Aruzhan wedding in Astana
    pub fn astana() -> Self {
        Self {
            phone_number: None,
            lang: None,
            groom_name: "Arman".to_string(),
            bride_name: "Aruzhan".to_string(),
            event_date: "2026-06-15".to_string(),
            event_location: "Astana".to_string(),
            content: None,
        }
    }
}

/// RSVP request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rsvp {
    pub guest_name: String,
    pub attendance: String,
    pub guest_count: i32,
}

impl Rsvp {
    pub fn new(guest_name: &str, attendance: &str, guest_count: i32) -> Self {
        Self {
            guest_name: guest_name.to_string(),
            attendance: attendance.to_string(),
            guest_count,
        }
    }
}
