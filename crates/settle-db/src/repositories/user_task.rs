//! PostgreSQL implementation of UserTaskRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use settle_core::entities::UserTask;
use settle_core::error::DomainError;
use settle_core::traits::{RepoResult, UserTaskRepository};
use settle_core::value_objects::RecordId;

use crate::models::UserTaskModel;

use super::error::{map_db_error, map_unique_violation, task_not_found};

const TASK_COLUMNS: &str = "id, user_id, template_id, status, completed_steps, blocked_by, \
                            blocked_reason, notes, due_date, completed_at, created_at, updated_at";

/// PostgreSQL implementation of UserTaskRepository
#[derive(Clone)]
pub struct PgUserTaskRepository {
    pool: PgPool,
}

impl PgUserTaskRepository {
    /// Create a new PgUserTaskRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserTaskRepository for PgUserTaskRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<UserTask>> {
        let result = sqlx::query_as::<_, UserTaskModel>(&format!(
            "SELECT {TASK_COLUMNS} FROM user_tasks WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(UserTask::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Vec<UserTask>> {
        let models = sqlx::query_as::<_, UserTaskModel>(&format!(
            "SELECT {TASK_COLUMNS} FROM user_tasks WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(UserTask::try_from).collect()
    }

    #[instrument(skip(self, task))]
    async fn create(&self, task: &UserTask) -> RepoResult<()> {
        let blocked_by: Vec<i64> = task.blocked_by.iter().map(|id| id.into_inner()).collect();

        sqlx::query(
            r"
            INSERT INTO user_tasks (id, user_id, template_id, status, completed_steps,
                                    blocked_by, blocked_reason, notes, due_date, completed_at,
                                    created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(task.id.into_inner())
        .bind(task.user_id.into_inner())
        .bind(task.template_id.into_inner())
        .bind(task.status.as_str())
        .bind(&task.completed_steps)
        .bind(blocked_by)
        .bind(&task.blocked_reason)
        .bind(&task.notes)
        .bind(task.due_date)
        .bind(task.completed_at)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TaskAlreadyOnRoadmap))?;

        Ok(())
    }

    #[instrument(skip(self, task))]
    async fn update(&self, task: &UserTask) -> RepoResult<()> {
        let blocked_by: Vec<i64> = task.blocked_by.iter().map(|id| id.into_inner()).collect();

        let result = sqlx::query(
            r"
            UPDATE user_tasks
            SET status = $2, completed_steps = $3, blocked_by = $4, blocked_reason = $5,
                notes = $6, due_date = $7, completed_at = $8, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(task.id.into_inner())
        .bind(task.status.as_str())
        .bind(&task.completed_steps)
        .bind(blocked_by)
        .bind(&task.blocked_reason)
        .bind(&task.notes)
        .bind(task.due_date)
        .bind(task.completed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(task_not_found(task.id));
        }

        Ok(())
    }
}
