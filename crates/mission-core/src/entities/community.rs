//! Community entity - a group mission with a roster and a date window

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::DomainError;
use crate::value_objects::{DateStatus, Snowflake};

/// Community (group mission) entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub id: Snowflake,
    pub title: String,
    pub image: Option<String>,
    pub creator_id: Snowflake,
    /// Maximum number of participants
    pub capacity: i32,
    /// Certified proofs needed for full completion
    pub score_target: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Community {
    /// Create a new Community, validating the date window and limits.
    pub fn new(
        id: Snowflake,
        title: String,
        creator_id: Snowflake,
        capacity: i32,
        score_target: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, DomainError> {
        if start_date > end_date {
            return Err(DomainError::InvalidDateWindow);
        }
        if capacity <= 0 {
            return Err(DomainError::ZeroCapacity);
        }
        if score_target <= 0 {
            return Err(DomainError::ZeroScoreTarget);
        }
        let now = Utc::now();
        Ok(Self {
            id,
            title,
            image: None,
            creator_id,
            capacity,
            score_target,
            start_date,
            end_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Check if a member created this community
    #[inline]
    pub fn is_creator(&self, member_id: Snowflake) -> bool {
        self.creator_id == member_id
    }

    /// Check if the roster is at capacity
    #[inline]
    pub fn is_full(&self, participant_count: i64) -> bool {
        participant_count >= i64::from(self.capacity)
    }

    /// Lifecycle state relative to `today`
    pub fn date_status(&self, today: NaiveDate) -> DateStatus {
        DateStatus::classify(self.start_date, self.end_date, today)
    }
}

/// Participant - membership edge between a member and a community.
///
/// Existence of this record is what gates proof creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub community_id: Snowflake,
    pub member_id: Snowflake,
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    /// Create a new Participant joining now
    pub fn new(community_id: Snowflake, member_id: Snowflake) -> Self {
        Self {
            community_id,
            member_id,
            joined_at: Utc::now(),
        }
    }
}
