//! Template doc entity <-> model mapper

use settle_core::{DomainError, RecordId, TemplateDoc};

use crate::models::TemplateDocModel;

impl TryFrom<TemplateDocModel> for TemplateDoc {
    type Error = DomainError;

    fn try_from(model: TemplateDocModel) -> Result<Self, Self::Error> {
        Ok(TemplateDoc {
            id: RecordId::new(model.id),
            title: model.title,
            slug: model.slug,
            category: model.category.parse()?,
            description: model.description,
            content: model.content,
            variables: model.variables.0,
            tags: model.tags,
            usage_count: model.usage_count,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
