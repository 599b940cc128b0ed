//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{
    ClearMission, Comment, Community, Heart, Member, Participant, Proof, ProofCounts, ProofImage,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Offset pagination for listing queries.
///
/// Caller-facing page numbers are 1-based; services translate them into the
/// 0-based offset carried here. Listing order is always creation time
/// descending.
#[derive(Debug, Clone, Copy)]
pub struct PageQuery {
    pub offset: i64,
    pub limit: i64,
}

impl PageQuery {
    /// Build from a 1-based page number and page size. Page numbers below 1
    /// clamp to the first page.
    pub fn from_page(page: i64, size: i64) -> Self {
        let page = page.max(1) - 1;
        Self {
            offset: page * size,
            limit: size,
        }
    }
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Member>>;

    /// Check if a nickname is already taken
    async fn nickname_exists(&self, nickname: &str) -> RepoResult<bool>;

    /// Create a new member
    async fn create(&self, member: &Member) -> RepoResult<()>;

    /// Update an existing member
    async fn update(&self, member: &Member) -> RepoResult<()>;

    /// Delete a member (withdrawal). Participations and cleared-mission
    /// records are removed by the service before this call.
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Community Repository
// ============================================================================

#[async_trait]
pub trait CommunityRepository: Send + Sync {
    /// Find community by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Community>>;

    /// List all communities a member participates in
    async fn find_by_member(&self, member_id: Snowflake) -> RepoResult<Vec<Community>>;

    /// Create a new community
    async fn create(&self, community: &Community) -> RepoResult<()>;

    /// Count certified proofs under the multi-participant rule (communities
    /// with two or more participants)
    async fn count_certified_group(&self, community_id: Snowflake) -> RepoResult<i64>;

    /// Count certified proofs under the single-person rule
    async fn count_certified_solo(&self, community_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Participant Repository
// ============================================================================

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Membership gate: check whether a member participates in a community
    async fn is_participant(&self, community_id: Snowflake, member_id: Snowflake)
        -> RepoResult<bool>;

    /// Count participants of a community
    async fn count_by_community(&self, community_id: Snowflake) -> RepoResult<i64>;

    /// Add a participant
    async fn create(&self, participant: &Participant) -> RepoResult<()>;

    /// Remove all participations of a member (withdrawal cascade)
    async fn delete_by_member(&self, member_id: Snowflake) -> RepoResult<u64>;
}

// ============================================================================
// Proof Repository
// ============================================================================

#[async_trait]
pub trait ProofRepository: Send + Sync {
    /// Find proof by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Proof>>;

    /// List proofs for a community, newest first
    async fn find_by_community(&self, community_id: Snowflake, page: PageQuery)
        -> RepoResult<Vec<Proof>>;

    /// Persist a proof together with its images in one transaction
    async fn create(&self, proof: &Proof, images: &[ProofImage]) -> RepoResult<()>;

    /// Update proof title/content
    async fn update(&self, proof: &Proof) -> RepoResult<()>;

    /// Delete a proof, cascading images, comments, and hearts
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Comment/heart counts for every proof of a community, newest first
    async fn counts_by_community(&self, community_id: Snowflake) -> RepoResult<Vec<ProofCounts>>;

    /// Comment/heart counts for one proof
    async fn counts(&self, proof_id: Snowflake) -> RepoResult<Option<ProofCounts>>;
}

// ============================================================================
// Proof Image Repository
// ============================================================================

#[async_trait]
pub trait ProofImageRepository: Send + Sync {
    /// Images of a proof ordered by position
    async fn find_by_proof(&self, proof_id: Snowflake) -> RepoResult<Vec<ProofImage>>;

    /// Overwrite URL and file name of an image in place
    async fn replace_file(&self, image: &ProofImage) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// Comments of a proof, oldest first
    async fn find_by_proof(&self, proof_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Create a comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Heart Repository
// ============================================================================

#[async_trait]
pub trait HeartRepository: Send + Sync {
    /// Check whether a member has hearted a proof
    async fn exists(&self, proof_id: Snowflake, member_id: Snowflake) -> RepoResult<bool>;

    /// Atomically toggle the heart for (proof, member). Returns `true` when
    /// the heart now exists, `false` when it was removed. The check and the
    /// mutation are one unit; concurrent double-invocation never produces
    /// duplicate rows.
    async fn toggle(&self, heart: &Heart) -> RepoResult<bool>;

    /// Count hearts on a proof
    async fn count_by_proof(&self, proof_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Clear Mission Repository
// ============================================================================

/// Per-day clear count for mission statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyClearCount {
    pub day: NaiveDate,
    pub count: i64,
}

#[async_trait]
pub trait ClearMissionRepository: Send + Sync {
    /// Total cleared missions of a member
    async fn count_by_member(&self, member_id: Snowflake) -> RepoResult<i64>;

    /// Cleared missions of a member on one day
    async fn find_by_member_and_date(
        &self,
        member_id: Snowflake,
        day: NaiveDate,
    ) -> RepoResult<Vec<ClearMission>>;

    /// Per-day clear counts in `[from, to]`
    async fn daily_stats(
        &self,
        member_id: Snowflake,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<Vec<DailyClearCount>>;

    /// Record a cleared mission
    async fn create(&self, clear: &ClearMission) -> RepoResult<()>;

    /// Remove all records of a member (withdrawal cascade)
    async fn delete_by_member(&self, member_id: Snowflake) -> RepoResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_translation() {
        // Caller page 1 is the first page internally
        let q = PageQuery::from_page(1, 10);
        assert_eq!(q.offset, 0);
        assert_eq!(q.limit, 10);

        let q = PageQuery::from_page(3, 10);
        assert_eq!(q.offset, 20);
    }

    #[test]
    fn test_page_query_clamps_below_one() {
        let q = PageQuery::from_page(0, 10);
        assert_eq!(q.offset, 0);

        let q = PageQuery::from_page(-5, 10);
        assert_eq!(q.offset, 0);
    }
}
