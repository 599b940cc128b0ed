//! PostgreSQL implementation of CommunityRepository
//!
//! The certified-proof counts implement the participant-count-dependent
//! counting rule: group communities only count proofs hearted by at least two
//! distinct participants, solo communities count every proof.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mission_core::entities::Community;
use mission_core::traits::{CommunityRepository, RepoResult};
use mission_core::value_objects::Snowflake;

use crate::models::CommunityModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommunityRepository
#[derive(Clone)]
pub struct PgCommunityRepository {
    pool: PgPool,
}

impl PgCommunityRepository {
    /// Create a new PgCommunityRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommunityRepository for PgCommunityRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Community>> {
        let result = sqlx::query_as::<_, CommunityModel>(
            r#"
            SELECT id, title, image, creator_id, capacity, score_target,
                   start_date, end_date, created_at, updated_at
            FROM communities
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Community::from))
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: Snowflake) -> RepoResult<Vec<Community>> {
        let results = sqlx::query_as::<_, CommunityModel>(
            r#"
            SELECT c.id, c.title, c.image, c.creator_id, c.capacity, c.score_target,
                   c.start_date, c.end_date, c.created_at, c.updated_at
            FROM communities c
            JOIN participants p ON p.community_id = c.id
            WHERE p.member_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Community::from).collect())
    }

    #[instrument(skip(self, community))]
    async fn create(&self, community: &Community) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO communities (id, title, image, creator_id, capacity, score_target,
                                     start_date, end_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(community.id.into_inner())
        .bind(&community.title)
        .bind(&community.image)
        .bind(community.creator_id.into_inner())
        .bind(community.capacity)
        .bind(community.score_target)
        .bind(community.start_date)
        .bind(community.end_date)
        .bind(community.created_at)
        .bind(community.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_certified_group(&self, community_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM proofs p
            WHERE p.community_id = $1
              AND (
                  SELECT COUNT(DISTINCT h.member_id)
                  FROM hearts h
                  JOIN participants pt
                    ON pt.member_id = h.member_id AND pt.community_id = p.community_id
                  WHERE h.proof_id = p.id
              ) >= 2
            "#,
        )
        .bind(community_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn count_certified_solo(&self, community_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM proofs WHERE community_id = $1
            "#,
        )
        .bind(community_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCommunityRepository>();
    }
}
