//! PostgreSQL implementation of ParticipantRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mission_core::entities::Participant;
use mission_core::traits::{ParticipantRepository, RepoResult};
use mission_core::value_objects::Snowflake;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ParticipantRepository
#[derive(Clone)]
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    /// Create a new PgParticipantRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    #[instrument(skip(self))]
    async fn is_participant(
        &self,
        community_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM participants WHERE community_id = $1 AND member_id = $2
            )
            "#,
        )
        .bind(community_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn count_by_community(&self, community_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM participants WHERE community_id = $1
            "#,
        )
        .bind(community_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, participant))]
    async fn create(&self, participant: &Participant) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO participants (community_id, member_id, joined_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(participant.community_id.into_inner())
        .bind(participant.member_id.into_inner())
        .bind(participant.joined_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || mission_core::DomainError::AlreadyJoined))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_member(&self, member_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM participants WHERE member_id = $1
            "#,
        )
        .bind(member_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgParticipantRepository>();
    }
}
