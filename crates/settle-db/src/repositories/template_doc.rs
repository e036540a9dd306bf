//! PostgreSQL implementation of TemplateDocRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use settle_core::entities::TemplateDoc;
use settle_core::error::DomainError;
use settle_core::traits::{RepoResult, TemplateDocRepository};
use settle_core::value_objects::{RecordId, TemplateDocCategory};

use crate::models::TemplateDocModel;

use super::error::{map_db_error, map_unique_violation};

const DOC_COLUMNS: &str = "id, title, slug, category, description, content, variables, tags, \
                           usage_count, is_active, created_at, updated_at";

/// PostgreSQL implementation of TemplateDocRepository
#[derive(Clone)]
pub struct PgTemplateDocRepository {
    pool: PgPool,
}

impl PgTemplateDocRepository {
    /// Create a new PgTemplateDocRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateDocRepository for PgTemplateDocRepository {
    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<TemplateDoc>> {
        let result = sqlx::query_as::<_, TemplateDocModel>(&format!(
            "SELECT {DOC_COLUMNS} FROM template_docs WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(TemplateDoc::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_active(
        &self,
        category: Option<TemplateDocCategory>,
    ) -> RepoResult<Vec<TemplateDoc>> {
        let models = sqlx::query_as::<_, TemplateDocModel>(&format!(
            "SELECT {DOC_COLUMNS} FROM template_docs \
             WHERE is_active AND ($1::TEXT IS NULL OR category = $1) \
             ORDER BY title"
        ))
        .bind(category.map(|c| c.as_str().to_string()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(TemplateDoc::try_from).collect()
    }

    #[instrument(skip(self, doc))]
    async fn create(&self, doc: &TemplateDoc) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO template_docs (id, title, slug, category, description, content,
                                       variables, tags, usage_count, is_active,
                                       created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(doc.id.into_inner())
        .bind(&doc.title)
        .bind(&doc.slug)
        .bind(doc.category.as_str())
        .bind(&doc.description)
        .bind(&doc.content)
        .bind(Json(&doc.variables))
        .bind(&doc.tags)
        .bind(doc.usage_count)
        .bind(doc.is_active)
        .bind(doc.created_at)
        .bind(doc.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::SlugAlreadyExists(doc.slug.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_usage(&self, id: RecordId) -> RepoResult<()> {
        sqlx::query("UPDATE template_docs SET usage_count = usage_count + 1 WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTemplateDocRepository>();
    }
}
