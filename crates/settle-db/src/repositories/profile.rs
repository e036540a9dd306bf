//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use settle_core::entities::Profile;
use settle_core::error::DomainError;
use settle_core::traits::{ProfileRepository, RepoResult};
use settle_core::value_objects::RecordId;

use crate::mappers::list_to_strings;
use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation, profile_not_found};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, user_id, status_type, region, city, postcode_area, arrival_date,
                   already_in_uk, housing_status, work_status, budget_band,
                   available_documents, needs, onboarding_completed, created_at, updated_at
            FROM profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Profile::try_from).transpose()
    }

    #[instrument(skip(self, profile))]
    async fn create(&self, profile: &Profile) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO profiles (id, user_id, status_type, region, city, postcode_area,
                                  arrival_date, already_in_uk, housing_status, work_status,
                                  budget_band, available_documents, needs,
                                  onboarding_completed, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ",
        )
        .bind(profile.id.into_inner())
        .bind(profile.user_id.into_inner())
        .bind(profile.status_type.as_str())
        .bind(profile.region.as_str())
        .bind(&profile.city)
        .bind(&profile.postcode_area)
        .bind(profile.arrival_date)
        .bind(profile.already_in_uk)
        .bind(profile.housing_status.as_str())
        .bind(profile.work_status.as_str())
        .bind(profile.budget_band.as_str())
        .bind(&profile.available_documents)
        .bind(list_to_strings(&profile.needs))
        .bind(profile.onboarding_completed)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ProfileAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self, profile))]
    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET status_type = $2, region = $3, city = $4, postcode_area = $5,
                arrival_date = $6, already_in_uk = $7, housing_status = $8,
                work_status = $9, budget_band = $10, available_documents = $11,
                needs = $12, onboarding_completed = $13, updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(profile.user_id.into_inner())
        .bind(profile.status_type.as_str())
        .bind(profile.region.as_str())
        .bind(&profile.city)
        .bind(&profile.postcode_area)
        .bind(profile.arrival_date)
        .bind(profile.already_in_uk)
        .bind(profile.housing_status.as_str())
        .bind(profile.work_status.as_str())
        .bind(profile.budget_band.as_str())
        .bind(&profile.available_documents)
        .bind(list_to_strings(&profile.needs))
        .bind(profile.onboarding_completed)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(profile.user_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_user(&self, user_id: RecordId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(user_id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgProfileRepository>();
    }
}
