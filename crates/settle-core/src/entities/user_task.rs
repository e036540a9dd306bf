//! User task entity - one roadmap item for one user

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{RecordId, TaskStatus};

/// A task template instantiated onto a user's roadmap.
///
/// Invariant: `status == Blocked` exactly when `blocked_by` is non-empty;
/// `blocked_by` holds the ids of the user tasks this one is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTask {
    pub id: RecordId,
    pub user_id: RecordId,
    pub template_id: RecordId,
    pub status: TaskStatus,
    pub completed_steps: Vec<i32>,
    pub blocked_by: Vec<RecordId>,
    pub blocked_reason: Option<String>,
    pub notes: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserTask {
    /// Create a fresh, unblocked task
    pub fn new(id: RecordId, user_id: RecordId, template_id: RecordId) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            template_id,
            status: TaskStatus::NotStarted,
            completed_steps: Vec::new(),
            blocked_by: Vec::new(),
            blocked_reason: None,
            notes: None,
            due_date: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.status == TaskStatus::Blocked
    }

    /// Mark this task as blocked on the given tasks
    pub fn block(&mut self, blocked_by: Vec<RecordId>, reason: String) {
        self.blocked_by = blocked_by;
        self.blocked_reason = Some(reason);
        self.status = TaskStatus::Blocked;
        self.updated_at = Utc::now();
    }

    /// Clear the block; the task returns to not-started
    pub fn unblock(&mut self) {
        self.blocked_by.clear();
        self.blocked_reason = None;
        if self.status == TaskStatus::Blocked {
            self.status = TaskStatus::NotStarted;
        }
        self.updated_at = Utc::now();
    }

    /// Move the task to in-progress
    ///
    /// # Errors
    /// Returns an error if the task is blocked or already completed.
    pub fn start(&mut self) -> Result<(), DomainError> {
        match self.status {
            TaskStatus::Blocked => Err(DomainError::TaskBlocked(
                self.blocked_reason
                    .clone()
                    .unwrap_or_else(|| "waiting on another task".to_string()),
            )),
            TaskStatus::Completed => Err(DomainError::TaskAlreadyCompleted),
            _ => {
                self.status = TaskStatus::InProgress;
                self.updated_at = Utc::now();
                Ok(())
            }
        }
    }

    /// Complete the task
    ///
    /// # Errors
    /// Returns an error if the task is blocked or already completed.
    pub fn complete(&mut self) -> Result<(), DomainError> {
        match self.status {
            TaskStatus::Blocked => Err(DomainError::TaskBlocked(
                self.blocked_reason
                    .clone()
                    .unwrap_or_else(|| "waiting on another task".to_string()),
            )),
            TaskStatus::Completed => Err(DomainError::TaskAlreadyCompleted),
            _ => {
                self.status = TaskStatus::Completed;
                self.completed_at = Some(Utc::now());
                self.updated_at = Utc::now();
                Ok(())
            }
        }
    }

    /// Skip the task; skipped tasks no longer block dependents
    ///
    /// # Errors
    /// Returns an error if the task is already completed.
    pub fn skip(&mut self) -> Result<(), DomainError> {
        if self.status == TaskStatus::Completed {
            return Err(DomainError::TaskAlreadyCompleted);
        }
        self.status = TaskStatus::Skipped;
        self.blocked_by.clear();
        self.blocked_reason = None;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Record a completed step, deduplicated, keeping the list ordered
    ///
    /// # Errors
    /// Returns an error for a non-positive step order.
    pub fn complete_step(&mut self, order: i32) -> Result<(), DomainError> {
        if order < 1 {
            return Err(DomainError::InvalidStep(order));
        }
        if let Err(pos) = self.completed_steps.binary_search(&order) {
            self.completed_steps.insert(pos, order);
            self.updated_at = Utc::now();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_task() -> UserTask {
        UserTask::new(RecordId::new(1000), RecordId::new(1), RecordId::new(100))
    }

    #[test]
    fn test_start_and_complete() {
        let mut task = test_task();
        task.start().unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);

        task.complete().unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(task.completed_at.is_some());
    }

    #[test]
    fn test_blocked_task_cannot_start_or_complete() {
        let mut task = test_task();
        task.block(
            vec![RecordId::new(999)],
            "Requires: Open UK Bank Account".to_string(),
        );

        assert!(matches!(task.start(), Err(DomainError::TaskBlocked(_))));
        assert!(matches!(task.complete(), Err(DomainError::TaskBlocked(_))));
    }

    #[test]
    fn test_unblock_returns_to_not_started() {
        let mut task = test_task();
        task.block(vec![RecordId::new(999)], "blocked".to_string());
        assert!(task.is_blocked());

        task.unblock();
        assert_eq!(task.status, TaskStatus::NotStarted);
        assert!(task.blocked_by.is_empty());
        assert!(task.blocked_reason.is_none());
    }

    #[test]
    fn test_completed_task_cannot_be_completed_again() {
        let mut task = test_task();
        task.complete().unwrap();
        assert!(matches!(
            task.complete(),
            Err(DomainError::TaskAlreadyCompleted)
        ));
    }

    #[test]
    fn test_skip_clears_block() {
        let mut task = test_task();
        task.block(vec![RecordId::new(999)], "blocked".to_string());
        task.skip().unwrap();
        assert_eq!(task.status, TaskStatus::Skipped);
        assert!(task.blocked_by.is_empty());
    }

    #[test]
    fn test_complete_step_dedupes_and_sorts() {
        let mut task = test_task();
        task.complete_step(3).unwrap();
        task.complete_step(1).unwrap();
        task.complete_step(3).unwrap();
        assert_eq!(task.completed_steps, vec![1, 3]);
    }

    #[test]
    fn test_complete_step_rejects_bad_order() {
        let mut task = test_task();
        assert!(matches!(
            task.complete_step(0),
            Err(DomainError::InvalidStep(0))
        ));
    }
}
