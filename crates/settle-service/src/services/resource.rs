//! Resource directory service

use chrono::Utc;
use settle_core::entities::Resource;
use settle_core::traits::ResourceFilter;
use settle_core::{DomainError, RecordId};
use tracing::{info, instrument};

use crate::dto::{CreateResourceRequest, ResourceResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Resource directory service
pub struct ResourceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ResourceService<'a> {
    /// Create a new ResourceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Search active directory entries
    #[instrument(skip(self))]
    pub async fn search(&self, filter: ResourceFilter) -> ServiceResult<Vec<ResourceResponse>> {
        let resources = self.ctx.resource_repo().search(&filter).await?;
        Ok(resources.iter().map(ResourceResponse::from).collect())
    }

    /// Get one directory entry
    #[instrument(skip(self))]
    pub async fn get(&self, id: RecordId) -> ServiceResult<ResourceResponse> {
        let resource = self
            .ctx
            .resource_repo()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ResourceNotFound(id)))?;

        Ok(ResourceResponse::from(&resource))
    }

    /// Create a directory entry (admin)
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(&self, request: CreateResourceRequest) -> ServiceResult<ResourceResponse> {
        if request.region.is_none() && !request.is_nationwide {
            return Err(ServiceError::validation(
                "A resource must either name a region or be nationwide",
            ));
        }

        let now = Utc::now();
        let resource = Resource {
            id: self.ctx.generate_id(),
            title: request.title,
            description: request.description,
            category: request.category,
            source_type: request.source_type,
            region: request.region,
            city: request.city.map(|c| c.trim().to_string()),
            postcode_area: request
                .postcode_area
                .map(|p| p.trim().to_uppercase()),
            is_nationwide: request.is_nationwide,
            website: request.website,
            phone: request.phone,
            email: request.email,
            address: request.address,
            tags: request.tags,
            is_verified: false,
            verified_at: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.ctx.resource_repo().create(&resource).await?;

        info!(resource_id = %resource.id, "Resource created");
        Ok(ResourceResponse::from(&resource))
    }
}

#[cfg(test)]
mod tests {
    // Covered end-to-end by tests/integration/tests/api_tests.rs
}
