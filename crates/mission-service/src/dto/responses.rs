//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Snowflake IDs
//! serialize as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use mission_core::{DateStatus, Snowflake};
use serde::Serialize;

// ============================================================================
// Proof Responses
// ============================================================================

/// Image attached to a proof
#[derive(Debug, Clone, Serialize)]
pub struct ProofImageResponse {
    pub image_id: Snowflake,
    pub url: String,
    pub file_name: String,
}

/// A proof with caller-dependent flags
#[derive(Debug, Clone, Serialize)]
pub struct ProofResponse {
    pub proof_id: Snowflake,
    pub title: String,
    pub content: String,
    pub author_nickname: String,
    pub images: Vec<ProofImageResponse>,
    pub comment_count: i64,
    pub heart_count: i64,
    /// Whether the caller wrote this proof (false for anonymous callers)
    pub is_writer: bool,
    /// Whether the caller has hearted this proof (false for anonymous callers)
    pub has_liked: bool,
    pub created_at: DateTime<Utc>,
}

/// Comment/heart counts for a proof
#[derive(Debug, Clone, Serialize)]
pub struct ProofCountResponse {
    pub proof_id: Snowflake,
    pub comment_count: i64,
    pub heart_count: i64,
}

/// Result of a heart toggle
#[derive(Debug, Clone, Serialize)]
pub struct HeartToggleResponse {
    pub proof_id: Snowflake,
    pub liked: bool,
    pub heart_count: i64,
}

/// Comment on a proof
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub comment_id: Snowflake,
    pub proof_id: Snowflake,
    pub author_nickname: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Community Responses
// ============================================================================

/// Community detail with derived progress figures
#[derive(Debug, Clone, Serialize)]
pub struct CommunityResponse {
    pub community_id: Snowflake,
    pub title: String,
    pub image: Option<String>,
    pub is_creator: bool,
    pub capacity: i32,
    pub score_target: i32,
    /// Roster fill percentage
    pub fill_percent: f64,
    /// Certified proofs against the score target
    pub success_percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub date_status: DateStatus,
}

/// Entry in the caller's joined group-mission list
#[derive(Debug, Clone, Serialize)]
pub struct JoinedCommunityResponse {
    pub community_id: Snowflake,
    pub title: String,
    pub image: Option<String>,
    pub is_creator: bool,
    pub fill_percent: f64,
    pub success_percent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub date_status: DateStatus,
}

// ============================================================================
// Member Responses
// ============================================================================

/// Member profile with derived level figures
#[derive(Debug, Clone, Serialize)]
pub struct UserInfoResponse {
    pub id: Snowflake,
    pub nickname: String,
    pub username: String,
    pub profile_image: Option<String>,
    pub level: i32,
    pub total_clear: i64,
    pub current_exp: i32,
    pub needed_exp_for_next_level: i32,
    pub is_secret: bool,
    pub login_type: String,
}

/// Nickname change result
#[derive(Debug, Clone, Serialize)]
pub struct NicknameResponse {
    pub nickname: String,
    pub success: bool,
}

/// A single cleared mission
#[derive(Debug, Clone, Serialize)]
pub struct ClearMissionResponse {
    pub id: Snowflake,
    pub mission_name: String,
    pub cleared_on: NaiveDate,
}

/// Cleared missions on one day
#[derive(Debug, Clone, Serialize)]
pub struct DailyMissionResponse {
    pub date: NaiveDate,
    pub missions: Vec<ClearMissionResponse>,
    pub count: i64,
}

/// Per-day clear count for statistics
#[derive(Debug, Clone, Serialize)]
pub struct DailyClearCountResponse {
    pub day: NaiveDate,
    pub count: i64,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Token pair response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with dependency checks
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
    pub cache: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool, cache: bool) -> Self {
        Self {
            status: if database && cache { "ready" } else { "degraded" },
            database,
            cache,
        }
    }
}
