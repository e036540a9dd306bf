//! Value objects - immutable types that represent domain concepts

mod enums;
mod record_id;

pub use enums::{
    BudgetBand, EnumParseError, FlagSeverity, HousingStatus, InputKind, Region, ResourceCategory,
    RiskLevel, ScamCategory, ServiceNeed, SourceType, StatusType, TaskCategory, TaskPriority,
    TaskStatus, TemplateDocCategory, UserRole, WorkStatus,
};
pub use record_id::{RecordId, RecordIdGenerator, RecordIdParseError};
