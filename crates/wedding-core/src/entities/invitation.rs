//! Invitation entity - one couple's event and its public page

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{generate_short_code, Lang};

/// Free-form invitation document (story text, address, section toggles).
///
/// Keys are never interpreted by the domain; unknown keys survive round-trips.
pub type InvitationContent = serde_json::Map<String, serde_json::Value>;

/// Invitation entity
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub uuid: Uuid,
    pub short_code: String,
    pub phone_number: String,
    pub template_code: String,
    pub lang: Lang,
    pub groom_name: String,
    pub bride_name: String,
    pub event_date: DateTime<Utc>,
    pub event_location: String,
    pub content: InvitationContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invitation {
    /// Template used when the creator does not pick one
    pub const DEFAULT_TEMPLATE: &'static str = "starry-night";

    /// Create a new Invitation with fresh identifiers and default presentation
    pub fn new(
        groom_name: String,
        bride_name: String,
        event_date: DateTime<Utc>,
        event_location: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            uuid: Uuid::new_v4(),
            short_code: generate_short_code(),
            phone_number: String::new(),
            template_code: Self::DEFAULT_TEMPLATE.to_string(),
            lang: Lang::default(),
            groom_name,
            bride_name,
            event_date,
            event_location,
            content: InvitationContent::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_phone_number(mut self, phone_number: String) -> Self {
        self.phone_number = phone_number;
        self
    }

    pub fn with_template_code(mut self, template_code: String) -> Self {
        self.template_code = template_code;
        self
    }

    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn with_content(mut self, content: InvitationContent) -> Self {
        self.content = content;
        self
    }

    /// Mark the invitation as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Path of the public invitation page
    pub fn page_path(&self) -> String {
        format!("/i/{}", self.uuid)
    }

    /// Path of the short redirect link
    pub fn short_link_path(&self) -> String {
        format!("/s/{}", self.short_code)
    }
}
