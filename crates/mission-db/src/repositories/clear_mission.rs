//! PostgreSQL implementation of ClearMissionRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use mission_core::entities::ClearMission;
use mission_core::traits::{ClearMissionRepository, DailyClearCount, RepoResult};
use mission_core::value_objects::Snowflake;

use crate::models::{ClearMissionModel, DailyClearCountModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ClearMissionRepository
#[derive(Clone)]
pub struct PgClearMissionRepository {
    pool: PgPool,
}

impl PgClearMissionRepository {
    /// Create a new PgClearMissionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClearMissionRepository for PgClearMissionRepository {
    #[instrument(skip(self))]
    async fn count_by_member(&self, member_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM clear_missions WHERE member_id = $1
            "#,
        )
        .bind(member_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn find_by_member_and_date(
        &self,
        member_id: Snowflake,
        day: NaiveDate,
    ) -> RepoResult<Vec<ClearMission>> {
        let results = sqlx::query_as::<_, ClearMissionModel>(
            r#"
            SELECT id, member_id, mission_name, cleared_on, created_at
            FROM clear_missions
            WHERE member_id = $1 AND cleared_on = $2
            ORDER BY created_at
            "#,
        )
        .bind(member_id.into_inner())
        .bind(day)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ClearMission::from).collect())
    }

    #[instrument(skip(self))]
    async fn daily_stats(
        &self,
        member_id: Snowflake,
        from: NaiveDate,
        to: NaiveDate,
    ) -> RepoResult<Vec<DailyClearCount>> {
        let results = sqlx::query_as::<_, DailyClearCountModel>(
            r#"
            SELECT cleared_on AS day, COUNT(*) AS count
            FROM clear_missions
            WHERE member_id = $1 AND cleared_on BETWEEN $2 AND $3
            GROUP BY cleared_on
            ORDER BY cleared_on
            "#,
        )
        .bind(member_id.into_inner())
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(DailyClearCount::from).collect())
    }

    #[instrument(skip(self, clear))]
    async fn create(&self, clear: &ClearMission) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO clear_missions (id, member_id, mission_name, cleared_on, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(clear.id.into_inner())
        .bind(clear.member_id.into_inner())
        .bind(&clear.mission_name)
        .bind(clear.cleared_on)
        .bind(clear.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_member(&self, member_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM clear_missions WHERE member_id = $1
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
        assert_send_sync::<PgClearMissionRepository>();
    }
}
