//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateCommentRequest, CreateCommunityRequest, CreateProofRequest, NicknameRequest,
    RecordClearRequest, RefreshTokenRequest, UpdateProofRequest,
};

// Re-export commonly used response types
pub use responses::{
    ClearMissionResponse, CommentResponse, CommunityResponse, DailyClearCountResponse,
    DailyMissionResponse, HealthResponse, HeartToggleResponse, JoinedCommunityResponse,
    NicknameResponse, ProofCountResponse, ProofImageResponse, ProofResponse, ReadinessResponse,
    TokenResponse, UserInfoResponse,
};

// Re-export mapper helper structs
pub use mappers::{CommunityWithProgress, MemberWithStats, ProofWithDetails};
