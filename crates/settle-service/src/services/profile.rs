//! Profile service
//!
//! Creates and updates the onboarding profile (one per user).

use settle_core::entities::Profile;
use settle_core::{DomainError, RecordId};
use tracing::{info, instrument};

use crate::dto::{OnboardingRequest, ProfileResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the current user's profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: RecordId) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ProfileNotFound(user_id)))?;

        Ok(ProfileResponse::from(&profile))
    }

    /// Create the profile from onboarding answers.
    ///
    /// Fails with a conflict when the user already has one; completing the
    /// wizard marks onboarding as done.
    #[instrument(skip(self, request))]
    pub async fn create_profile(
        &self,
        user_id: RecordId,
        request: OnboardingRequest,
    ) -> ServiceResult<ProfileResponse> {
        if self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .is_some()
        {
            return Err(ServiceError::Domain(DomainError::ProfileAlreadyExists));
        }

        let profile_id = self.ctx.generate_id();
        let profile = Self::apply_answers(Profile::new(
            profile_id,
            user_id,
            request.status_type,
            request.region,
            request.housing_status,
            request.work_status,
            request.budget_band,
        ), request);

        self.ctx.profile_repo().create(&profile).await?;

        info!(user_id = %user_id, "Profile created");
        Ok(ProfileResponse::from(&profile))
    }

    /// Replace the profile with new onboarding answers
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: RecordId,
        request: OnboardingRequest,
    ) -> ServiceResult<ProfileResponse> {
        let existing = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ProfileNotFound(user_id)))?;

        let mut profile = Self::apply_answers(existing, request);
        profile.updated_at = chrono::Utc::now();

        self.ctx.profile_repo().update(&profile).await?;

        info!(user_id = %user_id, "Profile updated");
        Ok(ProfileResponse::from(&profile))
    }

    /// Write onboarding answers onto a profile, normalizing as the document
    /// schema did (trimmed city, uppercased postcode area)
    fn apply_answers(mut profile: Profile, request: OnboardingRequest) -> Profile {
        profile.status_type = request.status_type;
        profile.region = request.region;
        profile.city = request.city.map(|c| c.trim().to_string()).filter(|c| !c.is_empty());
        profile.postcode_area = request
            .postcode_area
            .map(|p| Profile::normalize_postcode_area(&p))
            .filter(|p| !p.is_empty());
        profile.arrival_date = request.arrival_date;
        profile.already_in_uk = request.already_in_uk;
        profile.housing_status = request.housing_status;
        profile.work_status = request.work_status;
        profile.budget_band = request.budget_band;
        profile.available_documents = request.available_documents;
        profile.needs = request.needs;
        profile.onboarding_completed = true;
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_core::{BudgetBand, HousingStatus, Region, StatusType, WorkStatus};

    fn request() -> OnboardingRequest {
        OnboardingRequest {
            status_type: StatusType::Graduate,
            region: Region::Wales,
            city: Some("  Cardiff  ".to_string()),
            postcode_area: Some("cf10".to_string()),
            arrival_date: None,
            already_in_uk: true,
            housing_status: HousingStatus::Renting,
            work_status: WorkStatus::Employed,
            budget_band: BudgetBand::Comfortable,
            available_documents: vec!["passport".to_string()],
            needs: vec![],
        }
    }

    #[test]
    fn test_apply_answers_normalizes_and_completes() {
        let base = Profile::new(
            RecordId::new(10),
            RecordId::new(1),
            StatusType::Student,
            Region::England,
            HousingStatus::Searching,
            WorkStatus::Student,
            BudgetBand::Tight,
        );

        let profile = ProfileService::apply_answers(base, request());

        assert_eq!(profile.city.as_deref(), Some("Cardiff"));
        assert_eq!(profile.postcode_area.as_deref(), Some("CF10"));
        assert_eq!(profile.region, Region::Wales);
        assert!(profile.already_in_uk);
        assert!(profile.onboarding_completed);
    }
}
