//! # settle-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export DTOs
pub use dto::{
    AuthResponse, CreateResourceRequest, CreateTaskTemplateRequest, CurrentUserResponse,
    DbProbeResponse, HealthResponse, LoginRequest, LogoutRequest, OnboardingRequest,
    PaginatedResponse, ProfileResponse, ReadinessResponse, RefreshTokenRequest,
    RegisterRequest, RenderTemplateRequest, RenderedTemplateResponse, ResourceResponse,
    RoadmapResponse, RoadmapTaskResponse, ScamAssessmentResponse, ScamCheckRequest, TaskAction,
    TaskTemplateResponse, TemplateDocResponse, UpdateTaskRequest, UpdateUserRequest,
};

// Re-export services
pub use services::{
    AuthService, ProfileService, ResourceService, RoadmapService, ScamService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, TemplateService, UserService,
};
