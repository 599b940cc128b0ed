//! PostgreSQL implementation of HeartRepository
//!
//! The toggle leans on the (proof_id, member_id) primary key: the insert and
//! the fallback delete are each atomic, so two racing toggles can never leave
//! duplicate rows.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mission_core::entities::Heart;
use mission_core::traits::{HeartRepository, RepoResult};
use mission_core::value_objects::Snowflake;

use super::error::map_db_error;

/// PostgreSQL implementation of HeartRepository
#[derive(Clone)]
pub struct PgHeartRepository {
    pool: PgPool,
}

impl PgHeartRepository {
    /// Create a new PgHeartRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeartRepository for PgHeartRepository {
    #[instrument(skip(self))]
    async fn exists(&self, proof_id: Snowflake, member_id: Snowflake) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM hearts WHERE proof_id = $1 AND member_id = $2
            )
            "#,
        )
        .bind(proof_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, heart))]
    async fn toggle(&self, heart: &Heart) -> RepoResult<bool> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO hearts (proof_id, member_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (proof_id, member_id) DO NOTHING
            "#,
        )
        .bind(heart.proof_id.into_inner())
        .bind(heart.member_id.into_inner())
        .bind(heart.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?
        .rows_affected();

        if inserted > 0 {
            return Ok(true);
        }

        // Row already existed: this invocation un-hearts
        sqlx::query(
            r#"
            DELETE FROM hearts WHERE proof_id = $1 AND member_id = $2
            "#,
        )
        .bind(heart.proof_id.into_inner())
        .bind(heart.member_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(false)
    }

    #[instrument(skip(self))]
    async fn count_by_proof(&self, proof_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM hearts WHERE proof_id = $1
            "#,
        )
        .bind(proof_id.into_inner())
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
        assert_send_sync::<PgHeartRepository>();
    }
}
