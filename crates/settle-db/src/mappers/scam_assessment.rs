//! Scam assessment entity <-> model mapper

use settle_core::{DomainError, RecordId, ScamAssessment};

use crate::models::ScamAssessmentModel;

impl TryFrom<ScamAssessmentModel> for ScamAssessment {
    type Error = DomainError;

    fn try_from(model: ScamAssessmentModel) -> Result<Self, Self::Error> {
        Ok(ScamAssessment {
            id: RecordId::new(model.id),
            user_id: RecordId::new(model.user_id),
            input_kind: model.input_kind.parse()?,
            input_content: model.input_content,
            risk_score: model.risk_score.clamp(0, 100) as u8,
            risk_level: model.risk_level.parse()?,
            category: model.category.parse()?,
            red_flags: model.red_flags.0,
            safe_next_steps: model.safe_next_steps,
            reported_to_authorities: model.reported_to_authorities,
            created_at: model.created_at,
        })
    }
}
