//! PostgreSQL implementation of TaskTemplateRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use settle_core::entities::TaskTemplate;
use settle_core::error::DomainError;
use settle_core::traits::{RepoResult, TaskTemplateRepository};
use settle_core::value_objects::RecordId;

use crate::mappers::list_to_strings;
use crate::models::TaskTemplateModel;

use super::error::{map_db_error, map_unique_violation, template_not_found};

const TEMPLATE_COLUMNS: &str = "id, title, slug, category, description, detailed_instructions, \
                                priority, estimated_duration, region_rules, status_type_rules, \
                                housing_rules, work_rules, needs_rules, depends_on, \
                                required_documents, steps, official_links, is_active, \
                                created_at, updated_at";

/// PostgreSQL implementation of TaskTemplateRepository
#[derive(Clone)]
pub struct PgTaskTemplateRepository {
    pool: PgPool,
}

impl PgTaskTemplateRepository {
    /// Create a new PgTaskTemplateRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskTemplateRepository for PgTaskTemplateRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<TaskTemplate>> {
        let result = sqlx::query_as::<_, TaskTemplateModel>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM task_templates WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(TaskTemplate::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<TaskTemplate>> {
        let result = sqlx::query_as::<_, TaskTemplateModel>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM task_templates WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(TaskTemplate::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> RepoResult<Vec<TaskTemplate>> {
        let models = sqlx::query_as::<_, TaskTemplateModel>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM task_templates WHERE is_active ORDER BY title"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(TaskTemplate::try_from).collect()
    }

    #[instrument(skip(self, template))]
    async fn create(&self, template: &TaskTemplate) -> RepoResult<()> {
        let depends_on: Vec<i64> = template.depends_on.iter().map(|id| id.into_inner()).collect();

        sqlx::query(
            r"
            INSERT INTO task_templates (id, title, slug, category, description,
                                        detailed_instructions, priority, estimated_duration,
                                        region_rules, status_type_rules, housing_rules,
                                        work_rules, needs_rules, depends_on,
                                        required_documents, steps, official_links, is_active,
                                        created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                    $17, $18, $19, $20)
            ",
        )
        .bind(template.id.into_inner())
        .bind(&template.title)
        .bind(&template.slug)
        .bind(template.category.as_str())
        .bind(&template.description)
        .bind(&template.detailed_instructions)
        .bind(template.priority.as_str())
        .bind(&template.estimated_duration)
        .bind(list_to_strings(&template.region_rules))
        .bind(list_to_strings(&template.status_type_rules))
        .bind(list_to_strings(&template.housing_rules))
        .bind(list_to_strings(&template.work_rules))
        .bind(list_to_strings(&template.needs_rules))
        .bind(depends_on)
        .bind(&template.required_documents)
        .bind(Json(&template.steps))
        .bind(&template.official_links)
        .bind(template.is_active)
        .bind(template.created_at)
        .bind(template.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::SlugAlreadyExists(template.slug.clone()))
        })?;

        Ok(())
    }

    #[instrument(skip(self, template))]
    async fn update(&self, template: &TaskTemplate) -> RepoResult<()> {
        let depends_on: Vec<i64> = template.depends_on.iter().map(|id| id.into_inner()).collect();

        let result = sqlx::query(
            r"
            UPDATE task_templates
            SET title = $2, category = $3, description = $4, detailed_instructions = $5,
                priority = $6, estimated_duration = $7, region_rules = $8,
                status_type_rules = $9, housing_rules = $10, work_rules = $11,
                needs_rules = $12, depends_on = $13, required_documents = $14, steps = $15,
                official_links = $16, is_active = $17, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(template.id.into_inner())
        .bind(&template.title)
        .bind(template.category.as_str())
        .bind(&template.description)
        .bind(&template.detailed_instructions)
        .bind(template.priority.as_str())
        .bind(&template.estimated_duration)
        .bind(list_to_strings(&template.region_rules))
        .bind(list_to_strings(&template.status_type_rules))
        .bind(list_to_strings(&template.housing_rules))
        .bind(list_to_strings(&template.work_rules))
        .bind(list_to_strings(&template.needs_rules))
        .bind(depends_on)
        .bind(&template.required_documents)
        .bind(Json(&template.steps))
        .bind(&template.official_links)
        .bind(template.is_active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(template_not_found(&template.slug));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTaskTemplateRepository>();
    }
}
