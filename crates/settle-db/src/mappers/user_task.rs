//! User task entity <-> model mapper

use settle_core::{DomainError, RecordId, UserTask};

use crate::models::UserTaskModel;

impl TryFrom<UserTaskModel> for UserTask {
    type Error = DomainError;

    fn try_from(model: UserTaskModel) -> Result<Self, Self::Error> {
        Ok(UserTask {
            id: RecordId::new(model.id),
            user_id: RecordId::new(model.user_id),
            template_id: RecordId::new(model.template_id),
            status: model.status.parse()?,
            completed_steps: model.completed_steps,
            blocked_by: model.blocked_by.into_iter().map(RecordId::new).collect(),
            blocked_reason: model.blocked_reason,
            notes: model.notes,
            due_date: model.due_date,
            completed_at: model.completed_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
