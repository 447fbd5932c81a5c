//! Template entity - presentation catalog entry

use crate::value_objects::Lang;

/// Localized display names of a template
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateNames {
    pub ru: String,
    pub kk: Option<String>,
    pub en: Option<String>,
}

impl TemplateNames {
    /// Name in the given language, if one is set
    pub fn get(&self, lang: Lang) -> Option<&str> {
        let name = match lang {
            Lang::Ru => Some(self.ru.as_str()),
            Lang::Kk => self.kk.as_deref(),
            Lang::En => self.en.as_deref(),
        };
        name.filter(|n| !n.trim().is_empty())
    }
}

/// Template entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub code: String,
    pub names: TemplateNames,
    pub is_active: bool,
}

impl Template {
    /// Create a new active Template with a Russian display name
    pub fn new(code: String, name_ru: String) -> Self {
        Self {
            code,
            names: TemplateNames {
                ru: name_ru,
                kk: None,
                en: None,
            },
            is_active: true,
        }
    }

    pub fn with_names(mut self, kk: Option<String>, en: Option<String>) -> Self {
        self.names.kk = kk;
        self.names.en = en;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Display name for `lang`, falling back to the template code
    pub fn display_name(&self, lang: Lang) -> &str {
        self.names.get(lang).unwrap_or(&self.code)
    }
}
