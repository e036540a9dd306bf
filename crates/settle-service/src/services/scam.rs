//! Scam shield service
//!
//! Runs the heuristic analysis and persists assessments.

use settle_core::entities::{ScamAssessment, MAX_INPUT_LEN};
use settle_core::scam::analyze;
use settle_core::{DomainError, RecordId};
use tracing::{info, instrument};

use crate::dto::{PaginatedResponse, ScamAssessmentResponse, ScamCheckRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Scam shield service
pub struct ScamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScamService<'a> {
    /// Create a new ScamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Analyze submitted content and persist the assessment
    #[instrument(skip(self, request), fields(input_kind = %request.input_kind))]
    pub async fn check(
        &self,
        user_id: RecordId,
        request: ScamCheckRequest,
    ) -> ServiceResult<ScamAssessmentResponse> {
        if request.content.len() > MAX_INPUT_LEN {
            return Err(ServiceError::Domain(DomainError::ContentTooLong {
                max: MAX_INPUT_LEN,
            }));
        }

        let analysis = analyze(request.input_kind, &request.content);

        let assessment = ScamAssessment {
            id: self.ctx.generate_id(),
            user_id,
            input_kind: request.input_kind,
            input_content: request.content,
            risk_score: analysis.risk_score,
            risk_level: analysis.risk_level,
            category: analysis.category,
            red_flags: analysis.red_flags,
            safe_next_steps: analysis.safe_next_steps,
            reported_to_authorities: false,
            created_at: chrono::Utc::now(),
        };

        self.ctx.scam_repo().create(&assessment).await?;

        info!(
            user_id = %user_id,
            assessment_id = %assessment.id,
            risk_level = %assessment.risk_level,
            "Scam check completed"
        );

        Ok(ScamAssessmentResponse::from(&assessment))
    }

    /// List the user's assessments, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: RecordId,
        page: i64,
        page_size: i64,
    ) -> ServiceResult<PaginatedResponse<ScamAssessmentResponse>> {
        let offset = (page - 1) * page_size;
        let assessments = self
            .ctx
            .scam_repo()
            .find_by_user(user_id, page_size, offset)
            .await?;
        let total = self.ctx.scam_repo().count_by_user(user_id).await?;

        let items = assessments.iter().map(ScamAssessmentResponse::from).collect();
        Ok(PaginatedResponse::new(items, total, page, page_size))
    }

    /// Get one of the user's assessments
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        user_id: RecordId,
        assessment_id: RecordId,
    ) -> ServiceResult<ScamAssessmentResponse> {
        let assessment = self.find_owned(user_id, assessment_id).await?;
        Ok(ScamAssessmentResponse::from(&assessment))
    }

    /// Mark an assessment as reported to the authorities
    #[instrument(skip(self))]
    pub async fn report(
        &self,
        user_id: RecordId,
        assessment_id: RecordId,
    ) -> ServiceResult<ScamAssessmentResponse> {
        let mut assessment = self.find_owned(user_id, assessment_id).await?;

        self.ctx.scam_repo().mark_reported(assessment_id).await?;
        assessment.mark_reported();

        info!(user_id = %user_id, assessment_id = %assessment_id, "Assessment reported");
        Ok(ScamAssessmentResponse::from(&assessment))
    }

    /// Load an assessment, hiding other users' records behind not-found
    async fn find_owned(
        &self,
        user_id: RecordId,
        assessment_id: RecordId,
    ) -> ServiceResult<ScamAssessment> {
        let assessment = self
            .ctx
            .scam_repo()
            .find_by_id(assessment_id)
            .await?
            .filter(|a| a.user_id == user_id)
            .ok_or(ServiceError::Domain(DomainError::AssessmentNotFound(
                assessment_id,
            )))?;

        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    // Analysis behavior is covered in settle-core::scam; persistence is
    // covered by tests/integration/tests/api_tests.rs
}
