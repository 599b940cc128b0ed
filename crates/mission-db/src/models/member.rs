//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub nickname: String,
    pub username: String,
    pub profile_image: Option<String>,
    pub level: i32,
    pub exp: i32,
    pub is_secret: bool,
    pub login_provider: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
