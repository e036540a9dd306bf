//! Profile entity - onboarding answers for one user

use chrono::{DateTime, Utc};

use crate::value_objects::{
    BudgetBand, HousingStatus, RecordId, Region, ServiceNeed, StatusType, WorkStatus,
};

/// Onboarding profile, one-to-one with a user.
///
/// Everything the roadmap generator needs to decide which tasks apply lives
/// here. At most one profile exists per user (enforced by a unique key on
/// `user_id`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: RecordId,
    pub user_id: RecordId,
    pub status_type: StatusType,
    pub region: Region,
    pub city: Option<String>,
    pub postcode_area: Option<String>,
    pub arrival_date: Option<DateTime<Utc>>,
    pub already_in_uk: bool,
    pub housing_status: HousingStatus,
    pub work_status: WorkStatus,
    pub budget_band: BudgetBand,
    pub available_documents: Vec<String>,
    pub needs: Vec<ServiceNeed>,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile with the required onboarding answers
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RecordId,
        user_id: RecordId,
        status_type: StatusType,
        region: Region,
        housing_status: HousingStatus,
        work_status: WorkStatus,
        budget_band: BudgetBand,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            status_type,
            region,
            city: None,
            postcode_area: None,
            arrival_date: None,
            already_in_uk: false,
            housing_status,
            work_status,
            budget_band,
            available_documents: Vec::new(),
            needs: Vec::new(),
            onboarding_completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Normalize a postcode area for storage: trimmed and uppercased
    #[must_use]
    pub fn normalize_postcode_area(area: &str) -> String {
        area.trim().to_uppercase()
    }

    /// Check whether the user said they hold a given document
    #[must_use]
    pub fn has_document(&self, name: &str) -> bool {
        self.available_documents
            .iter()
            .any(|d| d.eq_ignore_ascii_case(name))
    }

    /// Check whether the user flagged a given need
    #[must_use]
    pub fn has_need(&self, need: ServiceNeed) -> bool {
        self.needs.contains(&need)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> Profile {
        Profile::new(
            RecordId::new(10),
            RecordId::new(1),
            StatusType::Student,
            Region::England,
            HousingStatus::Searching,
            WorkStatus::Student,
            BudgetBand::Tight,
        )
    }

    #[test]
    fn test_new_profile_defaults() {
        let profile = test_profile();
        assert!(!profile.already_in_uk);
        assert!(!profile.onboarding_completed);
        assert!(profile.needs.is_empty());
    }

    #[test]
    fn test_normalize_postcode_area() {
        assert_eq!(Profile::normalize_postcode_area(" sw1a "), "SW1A");
    }

    #[test]
    fn test_has_document_case_insensitive() {
        let mut profile = test_profile();
        profile.available_documents = vec!["Passport".to_string(), "BRP".to_string()];
        assert!(profile.has_document("passport"));
        assert!(profile.has_document("brp"));
        assert!(!profile.has_document("tenancy_agreement"));
    }

    #[test]
    fn test_has_need() {
        let mut profile = test_profile();
        profile.needs = vec![ServiceNeed::BankAccount, ServiceNeed::GpRegistration];
        assert!(profile.has_need(ServiceNeed::BankAccount));
        assert!(!profile.has_need(ServiceNeed::DrivingLicense));
    }
}
