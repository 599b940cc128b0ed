//! ClearMission database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for clear_missions table
#[derive(Debug, Clone, FromRow)]
pub struct ClearMissionModel {
    pub id: i64,
    pub member_id: i64,
    pub mission_name: String,
    pub cleared_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Per-day clear count (from query)
#[derive(Debug, Clone, FromRow)]
pub struct DailyClearCountModel {
    pub day: NaiveDate,
    pub count: i64,
}
