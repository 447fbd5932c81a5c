//! Template database model

use sqlx::FromRow;

/// Database model for templates table
#[derive(Debug, Clone, FromRow)]
pub struct TemplateModel {
    pub code: String,
    pub name_ru: String,
    pub name_kk: Option<String>,
    pub name_en: Option<String>,
    pub is_active: bool,
}
