//! PostgreSQL implementations of ProofRepository and ProofImageRepository
//!
//! Proof creation persists the proof row and its image rows in a single
//! transaction so a failed insert never leaves orphan images behind.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use mission_core::entities::{Proof, ProofCounts, ProofImage};
use mission_core::traits::{PageQuery, ProofImageRepository, ProofRepository, RepoResult};
use mission_core::value_objects::Snowflake;

use crate::models::{ProofCountsModel, ProofImageModel, ProofModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ProofRepository
#[derive(Clone)]
pub struct PgProofRepository {
    pool: PgPool,
}

impl PgProofRepository {
    /// Create a new PgProofRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProofRepository for PgProofRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Proof>> {
        let result = sqlx::query_as::<_, ProofModel>(
            r#"
            SELECT id, community_id, author_id, author_nickname, title, content,
                   created_at, updated_at
            FROM proofs
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Proof::from))
    }

    #[instrument(skip(self))]
    async fn find_by_community(
        &self,
        community_id: Snowflake,
        page: PageQuery,
    ) -> RepoResult<Vec<Proof>> {
        let results = sqlx::query_as::<_, ProofModel>(
            r#"
            SELECT id, community_id, author_id, author_nickname, title, content,
                   created_at, updated_at
            FROM proofs
            WHERE community_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(community_id.into_inner())
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Proof::from).collect())
    }

    #[instrument(skip(self, proof, images))]
    async fn create(&self, proof: &Proof, images: &[ProofImage]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO proofs (id, community_id, author_id, author_nickname, title,
                                content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(proof.id.into_inner())
        .bind(proof.community_id.into_inner())
        .bind(proof.author_id.into_inner())
        .bind(&proof.author_nickname)
        .bind(&proof.title)
        .bind(&proof.content)
        .bind(proof.created_at)
        .bind(proof.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        for image in images {
            sqlx::query(
                r#"
                INSERT INTO proof_images (id, proof_id, url, file_name, position)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(image.id.into_inner())
            .bind(image.proof_id.into_inner())
            .bind(&image.url)
            .bind(&image.file_name)
            .bind(image.position)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, proof))]
    async fn update(&self, proof: &Proof) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE proofs SET title = $2, content = $3, updated_at = $4 WHERE id = $1
            "#,
        )
        .bind(proof.id.into_inner())
        .bind(&proof.title)
        .bind(&proof.content)
        .bind(proof.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // Images, comments, and hearts go with the proof (ON DELETE CASCADE)
        sqlx::query(
            r#"
            DELETE FROM proofs WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn counts_by_community(&self, community_id: Snowflake) -> RepoResult<Vec<ProofCounts>> {
        let results = sqlx::query_as::<_, ProofCountsModel>(
            r#"
            SELECT p.id AS proof_id,
                   (SELECT COUNT(*) FROM comments c WHERE c.proof_id = p.id) AS comment_count,
                   (SELECT COUNT(*) FROM hearts h WHERE h.proof_id = p.id) AS heart_count
            FROM proofs p
            WHERE p.community_id = $1
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(community_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ProofCounts::from).collect())
    }

    #[instrument(skip(self))]
    async fn counts(&self, proof_id: Snowflake) -> RepoResult<Option<ProofCounts>> {
        let result = sqlx::query_as::<_, ProofCountsModel>(
            r#"
            SELECT p.id AS proof_id,
                   (SELECT COUNT(*) FROM comments c WHERE c.proof_id = p.id) AS comment_count,
                   (SELECT COUNT(*) FROM hearts h WHERE h.proof_id = p.id) AS heart_count
            FROM proofs p
            WHERE p.id = $1
            "#,
        )
        .bind(proof_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ProofCounts::from))
    }
}

/// PostgreSQL implementation of ProofImageRepository
#[derive(Clone)]
pub struct PgProofImageRepository {
    pool: PgPool,
}

impl PgProofImageRepository {
    /// Create a new PgProofImageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProofImageRepository for PgProofImageRepository {
    #[instrument(skip(self))]
    async fn find_by_proof(&self, proof_id: Snowflake) -> RepoResult<Vec<ProofImage>> {
        let results = sqlx::query_as::<_, ProofImageModel>(
            r#"
            SELECT id, proof_id, url, file_name, position
            FROM proof_images
            WHERE proof_id = $1
            ORDER BY position
            "#,
        )
        .bind(proof_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ProofImage::from).collect())
    }

    #[instrument(skip(self, image))]
    async fn replace_file(&self, image: &ProofImage) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE proof_images SET url = $2, file_name = $3 WHERE id = $1
            "#,
        )
        .bind(image.id.into_inner())
        .bind(&image.url)
        .bind(&image.file_name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
