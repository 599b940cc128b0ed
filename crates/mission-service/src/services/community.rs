//! Community service
//!
//! Handles group-mission creation, joining, and the derived progress views.

use chrono::Utc;
use mission_core::entities::{Community, Participant};
use mission_core::{progress, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    CommunityResponse, CommunityWithProgress, CreateCommunityRequest, JoinedCommunityResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Community service
pub struct CommunityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommunityService<'a> {
    /// Create a new CommunityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a community. The creator joins their own roster immediately.
    #[instrument(skip(self, request))]
    pub async fn create_community(
        &self,
        creator_id: Snowflake,
        request: CreateCommunityRequest,
    ) -> ServiceResult<CommunityResponse> {
        let mut community = Community::new(
            self.ctx.generate_id(),
            request.title,
            creator_id,
            request.capacity,
            request.score_target,
            request.start_date,
            request.end_date,
        )?;
        community.image = request.image;

        self.ctx.community_repo().create(&community).await?;
        self.ctx
            .participant_repo()
            .create(&Participant::new(community.id, creator_id))
            .await?;

        info!(community_id = %community.id, creator_id = %creator_id, "Community created");

        // Fresh community: one participant, nothing certified yet
        let fill_percent = progress::fill_percent(1, community.capacity)?;
        let date_status = community.date_status(Utc::now().date_naive());

        Ok(CommunityResponse::from(CommunityWithProgress {
            community,
            is_creator: true,
            fill_percent,
            success_percent: 0.0,
            date_status,
        }))
    }

    /// Community detail with fill/success percentages and date status
    #[instrument(skip(self))]
    pub async fn get_community(
        &self,
        community_id: Snowflake,
        caller: Option<Snowflake>,
    ) -> ServiceResult<CommunityResponse> {
        let community = self.require_community(community_id).await?;
        let details = self.with_progress(community, caller).await?;
        Ok(CommunityResponse::from(details))
    }

    /// Join a community. Fails with Conflict when already joined or full.
    #[instrument(skip(self))]
    pub async fn join_community(
        &self,
        community_id: Snowflake,
        member_id: Snowflake,
    ) -> ServiceResult<()> {
        let community = self.require_community(community_id).await?;

        if self
            .ctx
            .participant_repo()
            .is_participant(community.id, member_id)
            .await?
        {
            return Err(DomainError::AlreadyJoined.into());
        }

        let participant_count = self
            .ctx
            .participant_repo()
            .count_by_community(community.id)
            .await?;
        if community.is_full(participant_count) {
            return Err(DomainError::CommunityFull.into());
        }

        self.ctx
            .participant_repo()
            .create(&Participant::new(community.id, member_id))
            .await?;

        info!(community_id = %community.id, member_id = %member_id, "Member joined community");

        Ok(())
    }

    /// The caller's group-mission list with progress figures
    #[instrument(skip(self))]
    pub async fn joined_communities(
        &self,
        member_id: Snowflake,
    ) -> ServiceResult<Vec<JoinedCommunityResponse>> {
        let communities = self.ctx.community_repo().find_by_member(member_id).await?;

        let mut responses = Vec::with_capacity(communities.len());
        for community in communities {
            let details = self.with_progress(community, Some(member_id)).await?;
            responses.push(JoinedCommunityResponse::from(details));
        }

        Ok(responses)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn require_community(&self, community_id: Snowflake) -> ServiceResult<Community> {
        self.ctx
            .community_repo()
            .find_by_id(community_id)
            .await?
            .ok_or_else(|| DomainError::CommunityNotFound(community_id).into())
    }

    /// Compute the derived figures for one community.
    ///
    /// Certified proofs follow the participant-count-dependent rule: with two
    /// or more participants only multi-certified proofs count, otherwise the
    /// single-person count applies.
    async fn with_progress(
        &self,
        community: Community,
        caller: Option<Snowflake>,
    ) -> ServiceResult<CommunityWithProgress> {
        let participant_count = self
            .ctx
            .participant_repo()
            .count_by_community(community.id)
            .await?;

        let certified = if participant_count >= 2 {
            self.ctx
                .community_repo()
                .count_certified_group(community.id)
                .await?
        } else {
            self.ctx
                .community_repo()
                .count_certified_solo(community.id)
                .await?
        };

        let fill_percent = progress::fill_percent(participant_count, community.capacity)?;
        let success_percent = progress::success_percent(certified, community.score_target)?;
        let date_status = community.date_status(Utc::now().date_naive());
        let is_creator = caller.is_some_and(|id| community.is_creator(id));

        Ok(CommunityWithProgress {
            community,
            is_creator,
            fill_percent,
            success_percent,
            date_status,
        })
    }
}
