//! PostgreSQL implementation of ScamAssessmentRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use settle_core::entities::ScamAssessment;
use settle_core::traits::{RepoResult, ScamAssessmentRepository};
use settle_core::value_objects::RecordId;

use crate::models::ScamAssessmentModel;

use super::error::{assessment_not_found, map_db_error};

const ASSESSMENT_COLUMNS: &str = "id, user_id, input_kind, input_content, risk_score, \
                                  risk_level, category, red_flags, safe_next_steps, \
                                  reported_to_authorities, created_at";

/// PostgreSQL implementation of ScamAssessmentRepository
#[derive(Clone)]
pub struct PgScamAssessmentRepository {
    pool: PgPool,
}

impl PgScamAssessmentRepository {
    /// Create a new PgScamAssessmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScamAssessmentRepository for PgScamAssessmentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<ScamAssessment>> {
        let result = sqlx::query_as::<_, ScamAssessmentModel>(&format!(
            "SELECT {ASSESSMENT_COLUMNS} FROM scam_assessments WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ScamAssessment::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(
        &self,
        user_id: RecordId,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<ScamAssessment>> {
        let models = sqlx::query_as::<_, ScamAssessmentModel>(&format!(
            "SELECT {ASSESSMENT_COLUMNS} FROM scam_assessments \
             WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(user_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(ScamAssessment::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count_by_user(&self, user_id: RecordId) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM scam_assessments WHERE user_id = $1",
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, assessment))]
    async fn create(&self, assessment: &ScamAssessment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO scam_assessments (id, user_id, input_kind, input_content, risk_score,
                                          risk_level, category, red_flags, safe_next_steps,
                                          reported_to_authorities, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(assessment.id.into_inner())
        .bind(assessment.user_id.into_inner())
        .bind(assessment.input_kind.as_str())
        .bind(&assessment.input_content)
        .bind(i16::from(assessment.risk_score))
        .bind(assessment.risk_level.as_str())
        .bind(assessment.category.as_str())
        .bind(Json(&assessment.red_flags))
        .bind(&assessment.safe_next_steps)
        .bind(assessment.reported_to_authorities)
        .bind(assessment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_reported(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(
            "UPDATE scam_assessments SET reported_to_authorities = TRUE WHERE id = $1",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(assessment_not_found(id));
        }

        Ok(())
    }
}
