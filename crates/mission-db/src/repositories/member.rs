//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mission_core::entities::Member;
use mission_core::traits::{MemberRepository, RepoResult};
use mission_core::value_objects::Snowflake;

use crate::models::MemberModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT id, nickname, username, profile_image, level, exp, is_secret,
                   login_provider, created_at, updated_at
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn nickname_exists(&self, nickname: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM members WHERE nickname = $1)
            "#,
        )
        .bind(nickname)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self, member))]
    async fn create(&self, member: &Member) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO members (id, nickname, username, profile_image, level, exp,
                                 is_secret, login_provider, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(member.id.into_inner())
        .bind(&member.nickname)
        .bind(&member.username)
        .bind(&member.profile_image)
        .bind(member.level)
        .bind(member.exp)
        .bind(member.is_secret)
        .bind(member.login_provider.as_str())
        .bind(member.created_at)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                mission_core::DomainError::NicknameTaken(member.nickname.clone())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self, member))]
    async fn update(&self, member: &Member) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE members
            SET nickname = $2, username = $3, profile_image = $4, level = $5,
                exp = $6, is_secret = $7, updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(member.id.into_inner())
        .bind(&member.nickname)
        .bind(&member.username)
        .bind(&member.profile_image)
        .bind(member.level)
        .bind(member.exp)
        .bind(member.is_secret)
        .bind(member.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                mission_core::DomainError::NicknameTaken(member.nickname.clone())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM members WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMemberRepository>();
    }
}
