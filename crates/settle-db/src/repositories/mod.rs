//! PostgreSQL repository implementations

mod error;
mod profile;
mod resource;
mod scam_assessment;
mod task_template;
mod template_doc;
mod user;
mod user_task;

pub use profile::PgProfileRepository;
pub use resource::PgResourceRepository;
pub use scam_assessment::PgScamAssessmentRepository;
pub use task_template::PgTaskTemplateRepository;
pub use template_doc::PgTemplateDocRepository;
pub use user::PgUserRepository;
pub use user_task::PgUserTaskRepository;
