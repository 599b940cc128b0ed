//! # mission-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface used by the API crate
pub use dto::{
    ClearMissionResponse, CommentResponse, CommunityResponse, CreateCommentRequest,
    CreateCommunityRequest, CreateProofRequest, DailyClearCountResponse, DailyMissionResponse,
    HealthResponse, HeartToggleResponse, JoinedCommunityResponse, NicknameRequest,
    NicknameResponse, ProofCountResponse, ProofImageResponse, ProofResponse, ReadinessResponse,
    RecordClearRequest, RefreshTokenRequest, TokenResponse, UpdateProofRequest, UserInfoResponse,
};
pub use services::{
    AuthService, CommunityService, MemberService, ProofService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
