//! Domain entities

mod profile;
mod resource;
mod scam_assessment;
mod task_template;
mod template_doc;
mod user;
mod user_task;

pub use profile::Profile;
pub use resource::Resource;
pub use scam_assessment::{RedFlag, ScamAssessment, MAX_INPUT_LEN};
pub use task_template::{TaskStep, TaskTemplate};
pub use template_doc::{TemplateDoc, TemplateVariable, VariableSource};
pub use user::User;
pub use user_task::UserTask;
