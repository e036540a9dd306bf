//! Roadmap service
//!
//! Generates the personalized roadmap from the template catalog and drives
//! task status transitions, including dependency blocking.

use std::collections::HashMap;

use settle_core::entities::{TaskTemplate, UserTask};
use settle_core::roadmap::{eligible_templates, reconcile_blocking, RoadmapProgress};
use settle_core::{DomainError, RecordId};
use tracing::{info, instrument};

use crate::dto::{
    CreateTaskTemplateRequest, RoadmapResponse, RoadmapTaskResponse, TaskAction,
    TaskTemplateResponse, UpdateTaskRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Roadmap service
pub struct RoadmapService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoadmapService<'a> {
    /// Create a new RoadmapService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Generate (or extend) the user's roadmap from their profile.
    ///
    /// Idempotent: tasks that already exist are kept as-is; templates the
    /// user became eligible for since the last run are added. Blocking is
    /// recomputed across the whole roadmap afterwards.
    #[instrument(skip(self))]
    pub async fn generate(&self, user_id: RecordId) -> ServiceResult<RoadmapResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::ProfileNotFound(user_id)))?;

        if !profile.onboarding_completed {
            return Err(ServiceError::Domain(DomainError::OnboardingIncomplete));
        }

        let templates = self.ctx.task_template_repo().list_active().await?;
        let selected = eligible_templates(&templates, &profile);

        let mut tasks = self.ctx.user_task_repo().find_by_user(user_id).await?;
        let existing: std::collections::HashSet<RecordId> =
            tasks.iter().map(|t| t.template_id).collect();

        let mut created = 0usize;
        for template in &selected {
            if existing.contains(&template.id) {
                continue;
            }
            let task = UserTask::new(self.ctx.generate_id(), user_id, template.id);
            self.ctx.user_task_repo().create(&task).await?;
            tasks.push(task);
            created += 1;
        }

        // Recompute blocking over the full roadmap and persist what moved
        let changed = reconcile_blocking(&mut tasks, &templates);
        for task in tasks.iter().filter(|t| changed.contains(&t.id)) {
            self.ctx.user_task_repo().update(task).await?;
        }

        info!(
            user_id = %user_id,
            created,
            reblocked = changed.len(),
            "Roadmap generated"
        );

        Ok(Self::build_response(tasks, &templates))
    }

    /// Get the user's roadmap with progress counts
    #[instrument(skip(self))]
    pub async fn get_roadmap(&self, user_id: RecordId) -> ServiceResult<RoadmapResponse> {
        let tasks = self.ctx.user_task_repo().find_by_user(user_id).await?;
        let templates = self.ctx.task_template_repo().list_active().await?;
        Ok(Self::build_response(tasks, &templates))
    }

    /// Apply a status action and/or notes update to one task.
    ///
    /// Completing or skipping a task re-evaluates the rest of the roadmap so
    /// dependents unblock immediately.
    #[instrument(skip(self, request))]
    pub async fn update_task(
        &self,
        user_id: RecordId,
        task_id: RecordId,
        request: UpdateTaskRequest,
    ) -> ServiceResult<RoadmapResponse> {
        let mut task = self
            .ctx
            .user_task_repo()
            .find_by_id(task_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::TaskNotFound(task_id)))?;

        if task.user_id != user_id {
            return Err(ServiceError::Domain(DomainError::NotTaskOwner));
        }

        let mut cascade = false;
        if let Some(action) = request.action {
            match action {
                TaskAction::Start => task.start()?,
                TaskAction::Complete => {
                    task.complete()?;
                    cascade = true;
                }
                TaskAction::Skip => {
                    task.skip()?;
                    cascade = true;
                }
            }
        }

        if let Some(notes) = request.notes {
            task.notes = if notes.trim().is_empty() {
                None
            } else {
                Some(notes)
            };
        }

        self.ctx.user_task_repo().update(&task).await?;
        info!(user_id = %user_id, task_id = %task_id, status = %task.status, "Task updated");

        let templates = self.ctx.task_template_repo().list_active().await?;
        let mut tasks = self.ctx.user_task_repo().find_by_user(user_id).await?;

        if cascade {
            let changed = reconcile_blocking(&mut tasks, &templates);
            for changed_task in tasks.iter().filter(|t| changed.contains(&t.id)) {
                self.ctx.user_task_repo().update(changed_task).await?;
            }
        }

        Ok(Self::build_response(tasks, &templates))
    }

    /// Record one completed step on a task
    #[instrument(skip(self))]
    pub async fn complete_step(
        &self,
        user_id: RecordId,
        task_id: RecordId,
        step_order: i32,
    ) -> ServiceResult<RoadmapResponse> {
        let mut task = self
            .ctx
            .user_task_repo()
            .find_by_id(task_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::TaskNotFound(task_id)))?;

        if task.user_id != user_id {
            return Err(ServiceError::Domain(DomainError::NotTaskOwner));
        }

        // The step must exist on the template
        let template = self
            .ctx
            .task_template_repo()
            .find_by_id(task.template_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Domain(DomainError::TemplateNotFound(task.template_id.to_string()))
            })?;

        if !template.steps.iter().any(|s| s.order == step_order) {
            return Err(ServiceError::Domain(DomainError::InvalidStep(step_order)));
        }

        task.complete_step(step_order)?;
        self.ctx.user_task_repo().update(&task).await?;

        let templates = self.ctx.task_template_repo().list_active().await?;
        let tasks = self.ctx.user_task_repo().find_by_user(user_id).await?;
        Ok(Self::build_response(tasks, &templates))
    }

    /// Create a task template (admin)
    #[instrument(skip(self, request), fields(slug = %request.slug))]
    pub async fn create_template(
        &self,
        request: CreateTaskTemplateRequest,
    ) -> ServiceResult<TaskTemplateResponse> {
        // Dependencies must reference existing templates
        for dep_id in &request.depends_on {
            if self
                .ctx
                .task_template_repo()
                .find_by_id(*dep_id)
                .await?
                .is_none()
            {
                return Err(ServiceError::Domain(DomainError::TemplateNotFound(
                    dep_id.to_string(),
                )));
            }
        }

        let mut template = TaskTemplate::new(
            self.ctx.generate_id(),
            request.title,
            request.slug,
            request.category,
            request.priority,
        );
        template.description = request.description;
        template.detailed_instructions = request.detailed_instructions;
        template.estimated_duration = request.estimated_duration;
        template.region_rules = request.region_rules;
        template.status_type_rules = request.status_type_rules;
        template.housing_rules = request.housing_rules;
        template.work_rules = request.work_rules;
        template.needs_rules = request.needs_rules;
        template.depends_on = request.depends_on;
        template.required_documents = request.required_documents;
        template.steps = request.steps;
        template.official_links = request.official_links;

        self.ctx.task_template_repo().create(&template).await?;

        info!(template_id = %template.id, slug = %template.slug, "Task template created");
        Ok(TaskTemplateResponse::from(&template))
    }

    /// Join tasks with their templates, order by priority then title, and
    /// attach progress counts. Tasks whose template was deactivated since
    /// instantiation are kept but sorted last.
    fn build_response(tasks: Vec<UserTask>, templates: &[TaskTemplate]) -> RoadmapResponse {
        let templates_by_id: HashMap<RecordId, &TaskTemplate> =
            templates.iter().map(|t| (t.id, t)).collect();

        let progress = RoadmapProgress::from_tasks(&tasks);

        let mut entries: Vec<(Option<&TaskTemplate>, UserTask)> = tasks
            .into_iter()
            .map(|task| (templates_by_id.get(&task.template_id).copied(), task))
            .collect();

        entries.sort_by(|(a, task_a), (b, task_b)| match (a, b) {
            (Some(a), Some(b)) => a
                .priority
                .cmp(&b.priority)
                .then_with(|| a.title.cmp(&b.title)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => task_a.id.cmp(&task_b.id),
        });

        let tasks = entries
            .into_iter()
            .filter_map(|(template, task)| {
                template.map(|t| RoadmapTaskResponse {
                    id: task.id.to_string(),
                    template: TaskTemplateResponse::from(t),
                    status: task.status,
                    completed_steps: task.completed_steps,
                    blocked_by: task.blocked_by.iter().map(ToString::to_string).collect(),
                    blocked_reason: task.blocked_reason,
                    notes: task.notes,
                    due_date: task.due_date,
                    completed_at: task.completed_at,
                })
            })
            .collect();

        RoadmapResponse { tasks, progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settle_core::{TaskCategory, TaskPriority};

    fn template(id: i64, title: &str, priority: TaskPriority) -> TaskTemplate {
        TaskTemplate::new(
            RecordId::new(id),
            title.to_string(),
            title.to_lowercase().replace(' ', "-"),
            TaskCategory::Banking,
            priority,
        )
    }

    #[test]
    fn test_build_response_orders_by_priority() {
        let templates = vec![
            template(1, "Get a library card", TaskPriority::Low),
            template(2, "Collect BRP Card", TaskPriority::Critical),
        ];
        let tasks = vec![
            UserTask::new(RecordId::new(10), RecordId::new(1), RecordId::new(1)),
            UserTask::new(RecordId::new(11), RecordId::new(1), RecordId::new(2)),
        ];

        let response = RoadmapService::build_response(tasks, &templates);

        assert_eq!(response.tasks.len(), 2);
        assert_eq!(response.tasks[0].template.title, "Collect BRP Card");
        assert_eq!(response.progress.total, 2);
        assert_eq!(response.progress.not_started, 2);
    }

    #[test]
    fn test_build_response_drops_orphaned_tasks_from_listing() {
        // Task references a template that is no longer active
        let templates = vec![template(1, "Open UK Bank Account", TaskPriority::High)];
        let tasks = vec![
            UserTask::new(RecordId::new(10), RecordId::new(1), RecordId::new(1)),
            UserTask::new(RecordId::new(11), RecordId::new(1), RecordId::new(999)),
        ];

        let response = RoadmapService::build_response(tasks, &templates);

        assert_eq!(response.tasks.len(), 1);
        // Progress still counts every stored task
        assert_eq!(response.progress.total, 2);
    }
}
