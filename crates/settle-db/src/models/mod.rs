//! Database models (one per table)

mod profile;
mod resource;
mod scam_assessment;
mod task_template;
mod template_doc;
mod user;
mod user_task;

pub use profile::ProfileModel;
pub use resource::ResourceModel;
pub use scam_assessment::ScamAssessmentModel;
pub use task_template::TaskTemplateModel;
pub use template_doc::TemplateDocModel;
pub use user::UserModel;
pub use user_task::UserTaskModel;
