//! # settle-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! pure domain logic (task eligibility, dependency blocking, scam-message
//! scoring, template rendering). This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod roadmap;
pub mod scam;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Profile, RedFlag, Resource, ScamAssessment, TaskStep, TaskTemplate, TemplateDoc,
    TemplateVariable, User, UserTask, VariableSource,
};
pub use error::DomainError;
pub use traits::{
    ProfileRepository, RepoResult, ResourceFilter, ResourceRepository, ScamAssessmentRepository,
    TaskTemplateRepository, TemplateDocRepository, UserRepository, UserTaskRepository,
};
pub use value_objects::{
    BudgetBand, EnumParseError, FlagSeverity, HousingStatus, InputKind, RecordId,
    RecordIdGenerator, RecordIdParseError, Region, ResourceCategory, RiskLevel, ScamCategory,
    ServiceNeed, SourceType, StatusType, TaskCategory, TaskPriority, TaskStatus,
    TemplateDocCategory, UserRole, WorkStatus,
};
