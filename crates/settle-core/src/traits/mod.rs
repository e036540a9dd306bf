//! Repository traits (ports) for the persistence layer

mod repositories;

pub use repositories::{
    ProfileRepository, RepoResult, ResourceFilter, ResourceRepository, ScamAssessmentRepository,
    TaskTemplateRepository, TemplateDocRepository, UserRepository, UserTaskRepository,
};
