//! Roadmap assembly - eligibility selection and dependency blocking
//!
//! Pure functions over templates and user tasks. The service layer loads the
//! data, calls into here, and persists whatever changed.

use std::collections::HashMap;

use crate::entities::{Profile, TaskTemplate, UserTask};
use crate::value_objects::{RecordId, TaskStatus};

/// Outcome of re-evaluating one task's dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockChange {
    /// Task should be blocked on these user-task ids, with a reason
    Block {
        blocked_by: Vec<RecordId>,
        reason: String,
    },
    /// Task was blocked and no incomplete dependency remains
    Unblock,
    /// Nothing to change
    Unchanged,
}

/// Select the active templates a profile is eligible for,
/// ordered by priority then title
#[must_use]
pub fn eligible_templates<'a>(
    templates: &'a [TaskTemplate],
    profile: &Profile,
) -> Vec<&'a TaskTemplate> {
    let mut selected: Vec<&TaskTemplate> = templates
        .iter()
        .filter(|t| t.is_active && t.eligible_for(profile))
        .collect();
    selected.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.title.cmp(&b.title)));
    selected
}

/// Re-evaluate the block state of a single task.
///
/// A task waits on every dependency template that is present on the roadmap
/// and not yet in a terminal state. Dependencies that were never instantiated
/// (the user is not eligible for them) do not block.
#[must_use]
pub fn evaluate_block(
    task: &UserTask,
    template: &TaskTemplate,
    templates_by_id: &HashMap<RecordId, &TaskTemplate>,
    tasks_by_template: &HashMap<RecordId, &UserTask>,
) -> BlockChange {
    if task.status.is_terminal() {
        return BlockChange::Unchanged;
    }

    let mut blocked_by = Vec::new();
    let mut first_blocker_title = None;

    for dep_template_id in &template.depends_on {
        if let Some(dep_task) = tasks_by_template.get(dep_template_id) {
            if !dep_task.status.is_terminal() {
                blocked_by.push(dep_task.id);
                if first_blocker_title.is_none() {
                    first_blocker_title = Some(
                        templates_by_id
                            .get(dep_template_id)
                            .map_or_else(|| "another task".to_string(), |t| t.title.clone()),
                    );
                }
            }
        }
    }

    match (blocked_by.is_empty(), task.is_blocked()) {
        (true, true) => BlockChange::Unblock,
        (true, false) => BlockChange::Unchanged,
        (false, _) => {
            // Re-block even if already blocked: the blocking set may have changed
            if task.is_blocked() && task.blocked_by == blocked_by {
                BlockChange::Unchanged
            } else {
                let reason = format!(
                    "Requires: {}",
                    first_blocker_title.unwrap_or_else(|| "another task".to_string())
                );
                BlockChange::Block { blocked_by, reason }
            }
        }
    }
}

/// Apply `evaluate_block` across a whole roadmap, mutating tasks in place.
/// Returns the ids of tasks whose block state changed.
pub fn reconcile_blocking(
    tasks: &mut [UserTask],
    templates: &[TaskTemplate],
) -> Vec<RecordId> {
    let templates_by_id: HashMap<RecordId, &TaskTemplate> =
        templates.iter().map(|t| (t.id, t)).collect();

    // Snapshot of task state keyed by template, used for dependency lookups
    let snapshot: Vec<UserTask> = tasks.to_vec();
    let tasks_by_template: HashMap<RecordId, &UserTask> =
        snapshot.iter().map(|t| (t.template_id, t)).collect();

    let mut changed = Vec::new();

    for task in tasks.iter_mut() {
        let Some(template) = templates_by_id.get(&task.template_id) else {
            continue;
        };
        match evaluate_block(task, template, &templates_by_id, &tasks_by_template) {
            BlockChange::Block { blocked_by, reason } => {
                task.block(blocked_by, reason);
                changed.push(task.id);
            }
            BlockChange::Unblock => {
                task.unblock();
                changed.push(task.id);
            }
            BlockChange::Unchanged => {}
        }
    }

    changed
}

/// Per-status progress counts for a roadmap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct RoadmapProgress {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub blocked: usize,
    pub completed: usize,
    pub skipped: usize,
}

impl RoadmapProgress {
    /// Compute counts from a task list
    #[must_use]
    pub fn from_tasks(tasks: &[UserTask]) -> Self {
        let mut progress = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            match task.status {
                TaskStatus::NotStarted => progress.not_started += 1,
                TaskStatus::InProgress => progress.in_progress += 1,
                TaskStatus::Blocked => progress.blocked += 1,
                TaskStatus::Completed => progress.completed += 1,
                TaskStatus::Skipped => progress.skipped += 1,
            }
        }
        progress
    }

    /// Completion percentage (completed out of total), 0 for an empty roadmap
    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) / self.total) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{
        BudgetBand, HousingStatus, Region, StatusType, TaskCategory, TaskPriority, WorkStatus,
    };

    fn profile() -> Profile {
        Profile::new(
            RecordId::new(10),
            RecordId::new(1),
            StatusType::SkilledWorker,
            Region::England,
            HousingStatus::Renting,
            WorkStatus::Employed,
            BudgetBand::Moderate,
        )
    }

    fn template(id: i64, title: &str, priority: TaskPriority) -> TaskTemplate {
        TaskTemplate::new(
            RecordId::new(id),
            title.to_string(),
            title.to_lowercase().replace(' ', "-"),
            TaskCategory::Banking,
            priority,
        )
    }

    fn task(id: i64, user: i64, template_id: i64) -> UserTask {
        UserTask::new(RecordId::new(id), RecordId::new(user), RecordId::new(template_id))
    }

    #[test]
    fn test_eligible_templates_orders_by_priority() {
        let mut low = template(1, "Get a library card", TaskPriority::Low);
        low.is_active = true;
        let critical = template(2, "Collect BRP Card", TaskPriority::Critical);
        let mut inactive = template(3, "Old task", TaskPriority::Critical);
        inactive.is_active = false;

        let templates = vec![low, critical, inactive];
        let selected = eligible_templates(&templates, &profile());

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].title, "Collect BRP Card");
        assert_eq!(selected[1].title, "Get a library card");
    }

    #[test]
    fn test_eligible_templates_applies_rules() {
        let mut scotland_only = template(1, "Register with a Scottish GP", TaskPriority::High);
        scotland_only.region_rules = vec![Region::Scotland];
        let open = template(2, "Open UK Bank Account", TaskPriority::High);

        let templates = vec![scotland_only, open];
        let selected = eligible_templates(&templates, &profile());

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title, "Open UK Bank Account");
    }

    #[test]
    fn test_reconcile_blocks_dependent_task() {
        let bank = template(1, "Open UK Bank Account", TaskPriority::High);
        let mut ni = template(2, "Apply for National Insurance Number", TaskPriority::Medium);
        ni.depends_on = vec![bank.id];

        let templates = vec![bank, ni];
        let mut tasks = vec![task(100, 1, 1), task(101, 1, 2)];

        let changed = reconcile_blocking(&mut tasks, &templates);

        assert_eq!(changed, vec![RecordId::new(101)]);
        assert!(tasks[1].is_blocked());
        assert_eq!(tasks[1].blocked_by, vec![RecordId::new(100)]);
        assert_eq!(
            tasks[1].blocked_reason.as_deref(),
            Some("Requires: Open UK Bank Account")
        );
    }

    #[test]
    fn test_completing_dependency_unblocks() {
        let bank = template(1, "Open UK Bank Account", TaskPriority::High);
        let mut ni = template(2, "Apply for National Insurance Number", TaskPriority::Medium);
        ni.depends_on = vec![bank.id];
        let templates = vec![bank, ni];

        let mut tasks = vec![task(100, 1, 1), task(101, 1, 2)];
        reconcile_blocking(&mut tasks, &templates);
        assert!(tasks[1].is_blocked());

        tasks[0].complete().unwrap();
        let changed = reconcile_blocking(&mut tasks, &templates);

        assert_eq!(changed, vec![RecordId::new(101)]);
        assert_eq!(tasks[1].status, TaskStatus::NotStarted);
    }

    #[test]
    fn test_skipped_dependency_does_not_block() {
        let bank = template(1, "Open UK Bank Account", TaskPriority::High);
        let mut ni = template(2, "Apply for National Insurance Number", TaskPriority::Medium);
        ni.depends_on = vec![bank.id];
        let templates = vec![bank, ni];

        let mut bank_task = task(100, 1, 1);
        bank_task.skip().unwrap();
        let mut tasks = vec![bank_task, task(101, 1, 2)];

        reconcile_blocking(&mut tasks, &templates);
        assert!(!tasks[1].is_blocked());
    }

    #[test]
    fn test_missing_dependency_task_does_not_block() {
        // The dependency template exists but the user is not eligible for it,
        // so no user task was instantiated - the dependent stays unblocked.
        let mut ni = template(2, "Apply for National Insurance Number", TaskPriority::Medium);
        ni.depends_on = vec![RecordId::new(1)];
        let templates = vec![ni];

        let mut tasks = vec![task(101, 1, 2)];
        let changed = reconcile_blocking(&mut tasks, &templates);

        assert!(changed.is_empty());
        assert!(!tasks[0].is_blocked());
    }

    #[test]
    fn test_multiple_blockers_reported_in_order() {
        let a = template(1, "Collect BRP Card", TaskPriority::Critical);
        let b = template(2, "Open UK Bank Account", TaskPriority::High);
        let mut c = template(3, "Apply for National Insurance Number", TaskPriority::Medium);
        c.depends_on = vec![a.id, b.id];
        let templates = vec![a, b, c];

        let mut tasks = vec![task(100, 1, 1), task(101, 1, 2), task(102, 1, 3)];
        reconcile_blocking(&mut tasks, &templates);

        assert_eq!(
            tasks[2].blocked_by,
            vec![RecordId::new(100), RecordId::new(101)]
        );
        assert_eq!(
            tasks[2].blocked_reason.as_deref(),
            Some("Requires: Collect BRP Card")
        );
    }

    #[test]
    fn test_progress_counts() {
        let mut tasks = vec![task(1, 1, 1), task(2, 1, 2), task(3, 1, 3), task(4, 1, 4)];
        tasks[0].complete().unwrap();
        tasks[1].start().unwrap();
        tasks[2].block(vec![RecordId::new(1)], "blocked".to_string());

        let progress = RoadmapProgress::from_tasks(&tasks);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.in_progress, 1);
        assert_eq!(progress.blocked, 1);
        assert_eq!(progress.not_started, 1);
        assert_eq!(progress.percent_complete(), 25);
    }

    #[test]
    fn test_progress_empty_roadmap() {
        let progress = RoadmapProgress::from_tasks(&[]);
        assert_eq!(progress.percent_complete(), 0);
    }
}
