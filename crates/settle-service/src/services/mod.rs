//! Application services

mod auth;
mod context;
mod error;
mod profile;
mod resource;
mod roadmap;
mod scam;
mod template;
mod user;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use profile::ProfileService;
pub use resource::ResourceService;
pub use roadmap::RoadmapService;
pub use scam::ScamService;
pub use template::TemplateService;
pub use user::UserService;
