//! Task template entity - the catalog a roadmap is built from

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Profile;
use crate::value_objects::{
    HousingStatus, RecordId, Region, ServiceNeed, StatusType, TaskCategory, TaskPriority,
    WorkStatus,
};

/// A single instruction step inside a task template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStep {
    pub order: i32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub optional: bool,
}

/// Admin-managed task definition with eligibility rules and dependencies.
///
/// Rule lists are conjunctive across fields and disjunctive within a field:
/// an empty list imposes no restriction, a non-empty list requires the
/// profile's value to appear in it. `needs_rules` is the exception - it
/// matches when the profile flags at least one of the listed needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTemplate {
    pub id: RecordId,
    pub title: String,
    pub slug: String,
    pub category: TaskCategory,
    pub description: String,
    pub detailed_instructions: String,
    pub priority: TaskPriority,
    pub estimated_duration: String,

    // Eligibility rules
    pub region_rules: Vec<Region>,
    pub status_type_rules: Vec<StatusType>,
    pub housing_rules: Vec<HousingStatus>,
    pub work_rules: Vec<WorkStatus>,
    pub needs_rules: Vec<ServiceNeed>,

    // Dependencies & relations
    pub depends_on: Vec<RecordId>,
    pub required_documents: Vec<String>,

    pub steps: Vec<TaskStep>,
    pub official_links: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskTemplate {
    /// Create a minimal template; rule lists start unrestricted
    pub fn new(
        id: RecordId,
        title: String,
        slug: String,
        category: TaskCategory,
        priority: TaskPriority,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            slug,
            category,
            description: String::new(),
            detailed_instructions: String::new(),
            priority,
            estimated_duration: String::new(),
            region_rules: Vec::new(),
            status_type_rules: Vec::new(),
            housing_rules: Vec::new(),
            work_rules: Vec::new(),
            needs_rules: Vec::new(),
            depends_on: Vec::new(),
            required_documents: Vec::new(),
            steps: Vec::new(),
            official_links: Vec::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Decide whether this template belongs on the roadmap for a profile
    #[must_use]
    pub fn eligible_for(&self, profile: &Profile) -> bool {
        if !self.region_rules.is_empty() && !self.region_rules.contains(&profile.region) {
            return false;
        }
        if !self.status_type_rules.is_empty()
            && !self.status_type_rules.contains(&profile.status_type)
        {
            return false;
        }
        if !self.housing_rules.is_empty() && !self.housing_rules.contains(&profile.housing_status)
        {
            return false;
        }
        if !self.work_rules.is_empty() && !self.work_rules.contains(&profile.work_status) {
            return false;
        }
        if !self.needs_rules.is_empty()
            && !self.needs_rules.iter().any(|need| profile.has_need(*need))
        {
            return false;
        }
        true
    }

    /// Check whether another template must be finished before this one
    #[must_use]
    pub fn depends_on_template(&self, template_id: RecordId) -> bool {
        self.depends_on.contains(&template_id)
    }

    /// Step count excluding optional steps
    #[must_use]
    pub fn required_step_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.optional).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::BudgetBand;

    fn student_profile() -> Profile {
        let mut profile = Profile::new(
            RecordId::new(10),
            RecordId::new(1),
            StatusType::Student,
            Region::England,
            HousingStatus::Searching,
            WorkStatus::Student,
            BudgetBand::Tight,
        );
        profile.needs = vec![ServiceNeed::BankAccount, ServiceNeed::GpRegistration];
        profile
    }

    fn template(slug: &str) -> TaskTemplate {
        TaskTemplate::new(
            RecordId::new(100),
            "Open UK Bank Account".to_string(),
            slug.to_string(),
            TaskCategory::Banking,
            TaskPriority::High,
        )
    }

    #[test]
    fn test_empty_rules_match_everyone() {
        let tpl = template("open-bank-account");
        assert!(tpl.eligible_for(&student_profile()));
    }

    #[test]
    fn test_region_rule_excludes() {
        let mut tpl = template("open-bank-account");
        tpl.region_rules = vec![Region::Scotland];
        assert!(!tpl.eligible_for(&student_profile()));

        tpl.region_rules = vec![Region::Scotland, Region::England];
        assert!(tpl.eligible_for(&student_profile()));
    }

    #[test]
    fn test_status_type_rule() {
        let mut tpl = template("graduate-visa-switch");
        tpl.status_type_rules = vec![StatusType::Graduate];
        assert!(!tpl.eligible_for(&student_profile()));

        tpl.status_type_rules = vec![StatusType::Student, StatusType::Graduate];
        assert!(tpl.eligible_for(&student_profile()));
    }

    #[test]
    fn test_needs_rule_matches_any_overlap() {
        let mut tpl = template("open-bank-account");
        tpl.needs_rules = vec![ServiceNeed::BankAccount, ServiceNeed::CouncilTax];
        assert!(tpl.eligible_for(&student_profile()));

        tpl.needs_rules = vec![ServiceNeed::DrivingLicense];
        assert!(!tpl.eligible_for(&student_profile()));
    }

    #[test]
    fn test_all_rule_fields_are_conjunctive() {
        let mut tpl = template("open-bank-account");
        tpl.region_rules = vec![Region::England];
        tpl.work_rules = vec![WorkStatus::Employed];
        // Region matches but work status does not
        assert!(!tpl.eligible_for(&student_profile()));
    }

    #[test]
    fn test_required_step_count_skips_optional() {
        let mut tpl = template("open-bank-account");
        tpl.steps = vec![
            TaskStep {
                order: 1,
                title: "Choose a bank".to_string(),
                description: String::new(),
                optional: false,
            },
            TaskStep {
                order: 2,
                title: "Book a branch appointment".to_string(),
                description: String::new(),
                optional: true,
            },
        ];
        assert_eq!(tpl.required_step_count(), 1);
    }
}
