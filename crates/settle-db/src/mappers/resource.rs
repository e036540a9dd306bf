//! Resource entity <-> model mapper

use settle_core::{DomainError, RecordId, Resource};

use crate::models::ResourceModel;

impl TryFrom<ResourceModel> for Resource {
    type Error = DomainError;

    fn try_from(model: ResourceModel) -> Result<Self, Self::Error> {
        Ok(Resource {
            id: RecordId::new(model.id),
            title: model.title,
            description: model.description,
            category: model.category.parse()?,
            source_type: model.source_type.parse()?,
            region: model.region.map(|r| r.parse()).transpose()?,
            city: model.city,
            postcode_area: model.postcode_area,
            is_nationwide: model.is_nationwide,
            website: model.website,
            phone: model.phone,
            email: model.email,
            address: model.address,
            tags: model.tags,
            is_verified: model.is_verified,
            verified_at: model.verified_at,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
