//! Community database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for communities table
#[derive(Debug, Clone, FromRow)]
pub struct CommunityModel {
    pub id: i64,
    pub title: String,
    pub image: Option<String>,
    pub creator_id: i64,
    pub capacity: i32,
    pub score_target: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for participants table
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantModel {
    pub community_id: i64,
    pub member_id: i64,
    pub joined_at: DateTime<Utc>,
}
