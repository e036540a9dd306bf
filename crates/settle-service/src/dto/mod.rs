//! Data transfer objects for the API surface

mod mappers;
mod requests;
mod responses;

pub use requests::{
    CreateResourceRequest, CreateTaskTemplateRequest, LoginRequest, LogoutRequest,
    OnboardingRequest, RefreshTokenRequest, RegisterRequest, RenderTemplateRequest,
    ScamCheckRequest, TaskAction, UpdateTaskRequest, UpdateUserRequest,
};
pub use responses::{
    AuthResponse, CurrentUserResponse, DbProbeResponse, HealthResponse, PaginatedResponse,
    ProfileResponse, ReadinessResponse, RenderedTemplateResponse, ResourceResponse,
    RoadmapResponse, RoadmapTaskResponse, ScamAssessmentResponse, TaskTemplateResponse,
    TemplateDocResponse,
};
