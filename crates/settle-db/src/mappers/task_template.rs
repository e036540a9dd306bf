//! Task template entity <-> model mapper

use settle_core::{DomainError, RecordId, TaskTemplate};

use crate::mappers::parse_list;
use crate::models::TaskTemplateModel;

impl TryFrom<TaskTemplateModel> for TaskTemplate {
    type Error = DomainError;

    fn try_from(model: TaskTemplateModel) -> Result<Self, Self::Error> {
        Ok(TaskTemplate {
            id: RecordId::new(model.id),
            title: model.title,
            slug: model.slug,
            category: model.category.parse()?,
            description: model.description,
            detailed_instructions: model.detailed_instructions,
            priority: model.priority.parse()?,
            estimated_duration: model.estimated_duration,
            region_rules: parse_list(model.region_rules)?,
            status_type_rules: parse_list(model.status_type_rules)?,
            housing_rules: parse_list(model.housing_rules)?,
            work_rules: parse_list(model.work_rules)?,
            needs_rules: parse_list(model.needs_rules)?,
            depends_on: model.depends_on.into_iter().map(RecordId::new).collect(),
            required_documents: model.required_documents,
            steps: model.steps.0,
            official_links: model.official_links,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
