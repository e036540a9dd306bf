//! Profile entity <-> model mapper

use settle_core::{DomainError, Profile, RecordId};

use crate::mappers::parse_list;
use crate::models::ProfileModel;

impl TryFrom<ProfileModel> for Profile {
    type Error = DomainError;

    fn try_from(model: ProfileModel) -> Result<Self, Self::Error> {
        Ok(Profile {
            id: RecordId::new(model.id),
            user_id: RecordId::new(model.user_id),
            status_type: model.status_type.parse()?,
            region: model.region.parse()?,
            city: model.city,
            postcode_area: model.postcode_area,
            arrival_date: model.arrival_date,
            already_in_uk: model.already_in_uk,
            housing_status: model.housing_status.parse()?,
            work_status: model.work_status.parse()?,
            budget_band: model.budget_band.parse()?,
            available_documents: model.available_documents,
            needs: parse_list(model.needs)?,
            onboarding_completed: model.onboarding_completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
