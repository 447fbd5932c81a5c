//! Template entity <-> model mapper

use wedding_core::entities::{Template, TemplateNames};

use crate::models::TemplateModel;

impl From<TemplateModel> for Template {
    fn from(model: TemplateModel) -> Self {
        Template {
            code: model.code,
            names: TemplateNames {
                ru: model.name_ru,
                kk: model.name_kk,
                en: model.name_en,
            },
            is_active: model.is_active,
        }
    }
}
