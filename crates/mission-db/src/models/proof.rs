//! Proof aggregate database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for proofs table
#[derive(Debug, Clone, FromRow)]
pub struct ProofModel {
    pub id: i64,
    pub community_id: i64,
    pub author_id: i64,
    pub author_nickname: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for proof_images table
#[derive(Debug, Clone, FromRow)]
pub struct ProofImageModel {
    pub id: i64,
    pub proof_id: i64,
    pub url: String,
    pub file_name: String,
    pub position: i32,
}

/// Database model for comments table
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub proof_id: i64,
    pub author_id: i64,
    pub author_nickname: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Database model for hearts table
#[derive(Debug, Clone, FromRow)]
pub struct HeartModel {
    pub proof_id: i64,
    pub member_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Aggregated comment/heart counts (from query)
#[derive(Debug, Clone, FromRow)]
pub struct ProofCountsModel {
    pub proof_id: i64,
    pub comment_count: i64,
    pub heart_count: i64,
}
