//! PostgreSQL implementation of ResourceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use settle_core::entities::Resource;
use settle_core::error::DomainError;
use settle_core::traits::{RepoResult, ResourceFilter, ResourceRepository};
use settle_core::value_objects::RecordId;

use crate::models::ResourceModel;

use super::error::map_db_error;

const RESOURCE_COLUMNS: &str = "id, title, description, category, source_type, region, city, \
                                postcode_area, is_nationwide, website, phone, email, address, \
                                tags, is_verified, verified_at, is_active, created_at, updated_at";

/// PostgreSQL implementation of ResourceRepository
#[derive(Clone)]
pub struct PgResourceRepository {
    pool: PgPool,
}

impl PgResourceRepository {
    /// Create a new PgResourceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceRepository for PgResourceRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Resource>> {
        let result = sqlx::query_as::<_, ResourceModel>(&format!(
            "SELECT {RESOURCE_COLUMNS} FROM resources WHERE id = $1 AND is_active"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Resource::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn search(&self, filter: &ResourceFilter) -> RepoResult<Vec<Resource>> {
        // A region filter also matches nationwide entries
        let models = sqlx::query_as::<_, ResourceModel>(&format!(
            "SELECT {RESOURCE_COLUMNS} FROM resources \
             WHERE is_active \
               AND ($1::TEXT IS NULL OR category = $1) \
               AND ($2::TEXT IS NULL OR region = $2 OR is_nationwide) \
             ORDER BY is_verified DESC, title"
        ))
        .bind(filter.category.map(|c| c.as_str().to_string()))
        .bind(filter.region.map(|r| r.as_str().to_string()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Resource::try_from).collect()
    }

    #[instrument(skip(self, resource))]
    async fn create(&self, resource: &Resource) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO resources (id, title, description, category, source_type, region, city,
                                   postcode_area, is_nationwide, website, phone, email, address,
                                   tags, is_verified, verified_at, is_active,
                                   created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                    $17, $18, $19)
            ",
        )
        .bind(resource.id.into_inner())
        .bind(&resource.title)
        .bind(&resource.description)
        .bind(resource.category.as_str())
        .bind(resource.source_type.as_str())
        .bind(resource.region.map(|r| r.as_str().to_string()))
        .bind(&resource.city)
        .bind(&resource.postcode_area)
        .bind(resource.is_nationwide)
        .bind(&resource.website)
        .bind(&resource.phone)
        .bind(&resource.email)
        .bind(&resource.address)
        .bind(&resource.tags)
        .bind(resource.is_verified)
        .bind(resource.verified_at)
        .bind(resource.is_active)
        .bind(resource.created_at)
        .bind(resource.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgResourceRepository>();
    }
}
