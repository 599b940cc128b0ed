//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying free-form input
//! also implement `Validate`.

use chrono::NaiveDate;
use mission_core::Snowflake;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Proof Requests
// ============================================================================

/// Create proof request (the JSON part of the multipart payload)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProofRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,
}

/// Update proof request. `image_ids` pairs positionally with the uploaded
/// files: file N overwrites image `image_ids[N]` in place.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProofRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Content must be 1-2000 characters"))]
    pub content: String,

    #[serde(default)]
    pub image_ids: Vec<Snowflake>,
}

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 500, message = "Comment must be 1-500 characters"))]
    pub content: String,
}

// ============================================================================
// Community Requests
// ============================================================================

/// Create community request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommunityRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    pub image: Option<String>,

    #[validate(range(min = 1, max = 100, message = "Capacity must be 1-100"))]
    pub capacity: i32,

    #[validate(range(min = 1, message = "Score target must be positive"))]
    pub score_target: i32,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Nickname change / availability check request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NicknameRequest {
    #[validate(length(min = 2, max = 16, message = "Nickname must be 2-16 characters"))]
    pub nickname: String,
}

/// Record a cleared mission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordClearRequest {
    #[validate(length(min = 1, max = 100, message = "Mission name must be 1-100 characters"))]
    pub mission_name: String,

    pub cleared_on: NaiveDate,
}

// ============================================================================
// Auth Requests
// ============================================================================

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}
