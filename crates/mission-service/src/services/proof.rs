//! Proof service
//!
//! Handles the proof aggregate: listing, creation (behind the membership
//! gate), author-only edits and deletes, count projections, comments, and the
//! heart toggle.

use mission_core::entities::{Comment, Heart, Proof, ProofImage};
use mission_core::traits::{PageQuery, UploadFile};
use mission_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CommentResponse, CreateCommentRequest, CreateProofRequest, HeartToggleResponse,
    ProofCountResponse, ProofResponse, ProofWithDetails, UpdateProofRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Proof service
pub struct ProofService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProofService<'a> {
    /// Create a new ProofService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List proofs of a community, newest first.
    ///
    /// `page` is the caller-facing 1-based page number.
    #[instrument(skip(self))]
    pub async fn list_proofs(
        &self,
        community_id: Snowflake,
        page: i64,
        size: i64,
        caller: Option<Snowflake>,
    ) -> ServiceResult<Vec<ProofResponse>> {
        self.require_community(community_id).await?;

        let proofs = self
            .ctx
            .proof_repo()
            .find_by_community(community_id, PageQuery::from_page(page, size))
            .await?;

        let mut responses = Vec::with_capacity(proofs.len());
        for proof in proofs {
            responses.push(self.assemble(proof, caller).await?);
        }

        Ok(responses)
    }

    /// Get a single proof
    #[instrument(skip(self))]
    pub async fn get_proof(
        &self,
        proof_id: Snowflake,
        caller: Option<Snowflake>,
    ) -> ServiceResult<ProofResponse> {
        let proof = self.require_proof(proof_id).await?;
        self.assemble(proof, caller).await
    }

    /// Create a proof with its images.
    ///
    /// The membership gate runs first; a non-participant gets Forbidden and
    /// nothing is written. All uploads complete before anything is persisted,
    /// then the proof and its images land in one transaction.
    #[instrument(skip(self, request, files))]
    pub async fn create_proof(
        &self,
        community_id: Snowflake,
        author_id: Snowflake,
        author_nickname: &str,
        request: CreateProofRequest,
        files: Vec<UploadFile>,
    ) -> ServiceResult<ProofResponse> {
        let community = self.require_community(community_id).await?;

        if !self
            .ctx
            .participant_repo()
            .is_participant(community.id, author_id)
            .await?
        {
            return Err(DomainError::NotParticipant.into());
        }

        // Stage every upload before the first insert
        let mut stored = Vec::with_capacity(files.len());
        for file in &files {
            stored.push(self.ctx.storage().upload(file).await?);
        }

        let proof = Proof::new(
            self.ctx.generate_id(),
            community.id,
            author_id,
            author_nickname.to_string(),
            request.title,
            request.content,
        );

        let images: Vec<ProofImage> = stored
            .into_iter()
            .enumerate()
            .map(|(position, object)| {
                ProofImage::new(
                    self.ctx.generate_id(),
                    proof.id,
                    object.url,
                    object.file_name,
                    position as i32,
                )
            })
            .collect();

        self.ctx.proof_repo().create(&proof, &images).await?;

        info!(
            proof_id = %proof.id,
            community_id = %community.id,
            author_id = %author_id,
            image_count = images.len(),
            "Proof created"
        );

        Ok(ProofResponse::from(ProofWithDetails {
            proof,
            images,
            comment_count: 0,
            heart_count: 0,
            is_writer: true,
            has_liked: false,
        }))
    }

    /// Update a proof's title, content, and images.
    ///
    /// `request.image_ids` pairs positionally with `files`; the pairing is
    /// validated in full before any upload or write happens.
    #[instrument(skip(self, request, files))]
    pub async fn update_proof(
        &self,
        proof_id: Snowflake,
        caller_id: Snowflake,
        request: UpdateProofRequest,
        files: Vec<UploadFile>,
    ) -> ServiceResult<ProofResponse> {
        let mut proof = self.require_proof(proof_id).await?;

        if !proof.is_author(caller_id) {
            return Err(DomainError::NotProofAuthor.into());
        }

        if request.image_ids.len() != files.len() {
            return Err(DomainError::ImageEditMismatch {
                expected: request.image_ids.len(),
                got: files.len(),
            }
            .into());
        }

        let mut images = self.ctx.proof_image_repo().find_by_proof(proof.id).await?;

        // Every referenced image must belong to this proof
        for image_id in &request.image_ids {
            if !images.iter().any(|img| img.id == *image_id) {
                return Err(DomainError::ImageNotFound(*image_id).into());
            }
        }

        for (image_id, file) in request.image_ids.iter().zip(files.iter()) {
            let object = self.ctx.storage().upload(file).await?;
            // The pairing was validated above, the lookup cannot miss
            if let Some(image) = images.iter_mut().find(|img| img.id == *image_id) {
                image.replace_file(object.url, object.file_name);
                self.ctx.proof_image_repo().replace_file(image).await?;
            }
        }

        proof.edit(request.title, request.content);
        self.ctx.proof_repo().update(&proof).await?;

        info!(proof_id = %proof.id, "Proof updated");

        let counts = self.counts_for(proof.id).await?;
        let has_liked = self.ctx.heart_repo().exists(proof.id, caller_id).await?;

        Ok(ProofResponse::from(ProofWithDetails {
            proof,
            images,
            comment_count: counts.comment_count,
            heart_count: counts.heart_count,
            is_writer: true,
            has_liked,
        }))
    }

    /// Delete a proof, cascading its images, comments, and hearts.
    ///
    /// Only the author may delete; anyone else gets Forbidden.
    #[instrument(skip(self))]
    pub async fn delete_proof(&self, proof_id: Snowflake, caller_id: Snowflake) -> ServiceResult<()> {
        let proof = self.require_proof(proof_id).await?;

        if !proof.is_author(caller_id) {
            return Err(DomainError::NotProofAuthor.into());
        }

        self.ctx.proof_repo().delete(proof.id).await?;

        info!(proof_id = %proof.id, "Proof deleted");

        Ok(())
    }

    /// Comment/heart counts for every proof of a community
    #[instrument(skip(self))]
    pub async fn count_all_proofs(
        &self,
        community_id: Snowflake,
    ) -> ServiceResult<Vec<ProofCountResponse>> {
        self.require_community(community_id).await?;

        let counts = self.ctx.proof_repo().counts_by_community(community_id).await?;

        Ok(counts.into_iter().map(ProofCountResponse::from).collect())
    }

    /// Comment/heart counts for one proof
    #[instrument(skip(self))]
    pub async fn count_proof(&self, proof_id: Snowflake) -> ServiceResult<ProofCountResponse> {
        let counts = self.counts_for(proof_id).await?;
        Ok(ProofCountResponse::from(counts))
    }

    /// Toggle the caller's heart on a proof
    #[instrument(skip(self))]
    pub async fn toggle_heart(
        &self,
        proof_id: Snowflake,
        member_id: Snowflake,
    ) -> ServiceResult<HeartToggleResponse> {
        let proof = self.require_proof(proof_id).await?;

        let heart = Heart::new(proof.id, member_id);
        let liked = self.ctx.heart_repo().toggle(&heart).await?;
        let heart_count = self.ctx.heart_repo().count_by_proof(proof.id).await?;

        info!(proof_id = %proof.id, member_id = %member_id, liked, "Heart toggled");

        Ok(HeartToggleResponse {
            proof_id: proof.id,
            liked,
            heart_count,
        })
    }

    /// List comments of a proof, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, proof_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        self.require_proof(proof_id).await?;

        let comments = self.ctx.comment_repo().find_by_proof(proof_id).await?;

        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// Add a comment to a proof
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        proof_id: Snowflake,
        author_id: Snowflake,
        author_nickname: &str,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let proof = self.require_proof(proof_id).await?;

        let comment = Comment::new(
            self.ctx.generate_id(),
            proof.id,
            author_id,
            author_nickname.to_string(),
            request.content,
        );

        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, proof_id = %proof.id, "Comment created");

        Ok(CommentResponse::from(comment))
    }

    /// Delete a comment (author only)
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        comment_id: Snowflake,
        caller_id: Snowflake,
    ) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !comment.is_author(caller_id) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(comment.id).await?;

        info!(comment_id = %comment.id, "Comment deleted");

        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn require_community(
        &self,
        community_id: Snowflake,
    ) -> ServiceResult<mission_core::Community> {
        self.ctx
            .community_repo()
            .find_by_id(community_id)
            .await?
            .ok_or_else(|| DomainError::CommunityNotFound(community_id).into())
    }

    async fn require_proof(&self, proof_id: Snowflake) -> ServiceResult<Proof> {
        self.ctx
            .proof_repo()
            .find_by_id(proof_id)
            .await?
            .ok_or_else(|| DomainError::ProofNotFound(proof_id).into())
    }

    async fn counts_for(&self, proof_id: Snowflake) -> ServiceResult<mission_core::ProofCounts> {
        self.ctx
            .proof_repo()
            .counts(proof_id)
            .await?
            .ok_or_else(|| DomainError::ProofNotFound(proof_id).into())
    }

    /// Assemble the caller-visible projection of one proof
    async fn assemble(
        &self,
        proof: Proof,
        caller: Option<Snowflake>,
    ) -> ServiceResult<ProofResponse> {
        let images = self.ctx.proof_image_repo().find_by_proof(proof.id).await?;
        let counts = self.counts_for(proof.id).await?;

        let (is_writer, has_liked) = match caller {
            Some(caller_id) => (
                proof.is_author(caller_id),
                self.ctx.heart_repo().exists(proof.id, caller_id).await?,
            ),
            None => (false, false),
        };

        Ok(ProofResponse::from(ProofWithDetails {
            proof,
            images,
            comment_count: counts.comment_count,
            heart_count: counts.heart_count,
            is_writer,
            has_liked,
        }))
    }
}
