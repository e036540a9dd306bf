//! Entity -> response DTO mappers

use settle_core::{Profile, Resource, ScamAssessment, TaskTemplate, TemplateDoc, User};

use super::responses::{
    CurrentUserResponse, ProfileResponse, ResourceResponse, ScamAssessmentResponse,
    TaskTemplateResponse, TemplateDocResponse,
};

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            image: user.image.clone(),
            role: user.role,
            is_active: user.is_active,
            email_verified: user.email_verified,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            status_type: profile.status_type,
            region: profile.region,
            city: profile.city.clone(),
            postcode_area: profile.postcode_area.clone(),
            arrival_date: profile.arrival_date,
            already_in_uk: profile.already_in_uk,
            housing_status: profile.housing_status,
            work_status: profile.work_status,
            budget_band: profile.budget_band,
            available_documents: profile.available_documents.clone(),
            needs: profile.needs.clone(),
            onboarding_completed: profile.onboarding_completed,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<&TaskTemplate> for TaskTemplateResponse {
    fn from(template: &TaskTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            title: template.title.clone(),
            slug: template.slug.clone(),
            category: template.category,
            description: template.description.clone(),
            detailed_instructions: template.detailed_instructions.clone(),
            priority: template.priority,
            estimated_duration: template.estimated_duration.clone(),
            required_documents: template.required_documents.clone(),
            steps: template.steps.clone(),
            official_links: template.official_links.clone(),
        }
    }
}

impl From<&ScamAssessment> for ScamAssessmentResponse {
    fn from(assessment: &ScamAssessment) -> Self {
        Self {
            id: assessment.id.to_string(),
            input_kind: assessment.input_kind,
            input_content: assessment.input_content.clone(),
            risk_score: assessment.risk_score,
            risk_level: assessment.risk_level,
            category: assessment.category,
            red_flags: assessment.red_flags.clone(),
            safe_next_steps: assessment.safe_next_steps.clone(),
            reported_to_authorities: assessment.reported_to_authorities,
            created_at: assessment.created_at,
        }
    }
}

impl From<&TemplateDoc> for TemplateDocResponse {
    fn from(doc: &TemplateDoc) -> Self {
        Self {
            id: doc.id.to_string(),
            title: doc.title.clone(),
            slug: doc.slug.clone(),
            category: doc.category,
            description: doc.description.clone(),
            variables: doc.variables.clone(),
            tags: doc.tags.clone(),
            usage_count: doc.usage_count,
        }
    }
}

impl From<&Resource> for ResourceResponse {
    fn from(resource: &Resource) -> Self {
        Self {
            id: resource.id.to_string(),
            title: resource.title.clone(),
            description: resource.description.clone(),
            category: resource.category,
            source_type: resource.source_type,
            region: resource.region,
            city: resource.city.clone(),
            postcode_area: resource.postcode_area.clone(),
            is_nationwide: resource.is_nationwide,
            website: resource.website.clone(),
            phone: resource.phone.clone(),
            email: resource.email.clone(),
            address: resource.address.clone(),
            tags: resource.tags.clone(),
            is_verified: resource.is_verified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_core::RecordId;

    #[test]
    fn test_user_response_has_no_password_field() {
        let user = User::new(
            RecordId::new(1),
            "amira@example.com".to_string(),
            Some("Amira".to_string()),
        );
        let response = CurrentUserResponse::from(&user);
        let json = serde_json::to_value(&response).unwrap();

        // The serialized form must never mention password material
        let body = json.to_string();
        assert!(!body.contains("password"));
        assert!(!body.contains("hash"));
        assert_eq!(json["id"], "1");
        assert_eq!(json["email"], "amira@example.com");
    }
}
