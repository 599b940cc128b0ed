//! ClearMission entity - a record of one completed mission unit

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Snowflake;

/// A member's completion of a single mission unit on a given day. Used as the
/// count source for levels and daily statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearMission {
    pub id: Snowflake,
    pub member_id: Snowflake,
    pub mission_name: String,
    pub cleared_on: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl ClearMission {
    /// Create a new ClearMission
    pub fn new(id: Snowflake, member_id: Snowflake, mission_name: String, cleared_on: NaiveDate) -> Self {
        Self {
            id,
            member_id,
            mission_name,
            cleared_on,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_mission_creation() {
        let cleared_on = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let clear = ClearMission::new(
            Snowflake::new(1),
            Snowflake::new(100),
            "tumbler day".to_string(),
            cleared_on,
        );
        assert_eq!(clear.member_id, Snowflake::new(100));
        assert_eq!(clear.cleared_on, cleared_on);
    }
}
