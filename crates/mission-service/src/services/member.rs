//! Member service
//!
//! Handles profiles (with the secret-profile gate), nicknames, privacy,
//! withdrawal, and cleared-mission statistics.

use chrono::NaiveDate;
use mission_core::entities::{ClearMission, Member};
use mission_core::traits::UploadFile;
use mission_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    ClearMissionResponse, DailyClearCountResponse, DailyMissionResponse, MemberWithStats,
    NicknameRequest, NicknameResponse, RecordClearRequest, UserInfoResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The caller's own profile
    #[instrument(skip(self))]
    pub async fn my_page(&self, member_id: Snowflake) -> ServiceResult<UserInfoResponse> {
        let member = self.require_member(member_id).await?;
        self.user_info(member).await
    }

    /// Another member's profile. Secret profiles are visible only to their
    /// owner; everyone else gets Forbidden.
    #[instrument(skip(self))]
    pub async fn get_user_info(
        &self,
        target_id: Snowflake,
        caller: Option<Snowflake>,
    ) -> ServiceResult<UserInfoResponse> {
        let member = self.require_member(target_id).await?;

        if member.is_secret && caller != Some(member.id) {
            return Err(DomainError::ClosedProfile.into());
        }

        self.user_info(member).await
    }

    /// Nickname availability check: true when the nickname is free
    #[instrument(skip(self))]
    pub async fn check_nickname(&self, nickname: &str) -> ServiceResult<bool> {
        Ok(!self.ctx.member_repo().nickname_exists(nickname).await?)
    }

    /// Change the caller's nickname. Duplicates are a Conflict.
    #[instrument(skip(self, request))]
    pub async fn update_nickname(
        &self,
        member_id: Snowflake,
        request: NicknameRequest,
    ) -> ServiceResult<NicknameResponse> {
        let mut member = self.require_member(member_id).await?;

        if request.nickname != member.nickname
            && self.ctx.member_repo().nickname_exists(&request.nickname).await?
        {
            return Err(DomainError::NicknameTaken(request.nickname).into());
        }

        member.update_nickname(request.nickname);
        self.ctx.member_repo().update(&member).await?;

        info!(member_id = %member.id, "Nickname updated");

        Ok(NicknameResponse {
            nickname: member.nickname,
            success: true,
        })
    }

    /// Flip the caller's privacy flag, returning the new value
    #[instrument(skip(self))]
    pub async fn toggle_privacy(&self, member_id: Snowflake) -> ServiceResult<bool> {
        let mut member = self.require_member(member_id).await?;

        let is_secret = member.toggle_secret();
        self.ctx.member_repo().update(&member).await?;

        info!(member_id = %member.id, is_secret, "Privacy toggled");

        Ok(is_secret)
    }

    /// Upload and set a new profile image, returning its URL
    #[instrument(skip(self, file))]
    pub async fn change_profile_image(
        &self,
        member_id: Snowflake,
        file: UploadFile,
    ) -> ServiceResult<String> {
        let mut member = self.require_member(member_id).await?;

        let stored = self.ctx.storage().upload(&file).await?;
        member.change_profile_image(stored.url.clone());
        self.ctx.member_repo().update(&member).await?;

        info!(member_id = %member.id, "Profile image changed");

        Ok(stored.url)
    }

    /// Withdraw from the service. Participations and cleared-mission records
    /// go with the member.
    #[instrument(skip(self))]
    pub async fn withdraw(&self, member_id: Snowflake) -> ServiceResult<()> {
        let member = self.require_member(member_id).await?;

        self.ctx.participant_repo().delete_by_member(member.id).await?;
        self.ctx.clear_mission_repo().delete_by_member(member.id).await?;
        self.ctx.member_repo().delete(member.id).await?;

        info!(member_id = %member.id, "Member withdrawn");

        Ok(())
    }

    /// Record a cleared mission and grant experience for it
    #[instrument(skip(self, request))]
    pub async fn record_clear(
        &self,
        member_id: Snowflake,
        request: RecordClearRequest,
    ) -> ServiceResult<ClearMissionResponse> {
        let mut member = self.require_member(member_id).await?;

        let clear = ClearMission::new(
            self.ctx.generate_id(),
            member.id,
            request.mission_name,
            request.cleared_on,
        );
        self.ctx.clear_mission_repo().create(&clear).await?;

        member.gain_exp(1);
        self.ctx.member_repo().update(&member).await?;

        info!(member_id = %member.id, cleared_on = %clear.cleared_on, "Mission cleared");

        Ok(ClearMissionResponse::from(clear))
    }

    /// The caller's cleared missions on one day
    #[instrument(skip(self))]
    pub async fn target_day_missions(
        &self,
        member_id: Snowflake,
        day: NaiveDate,
    ) -> ServiceResult<DailyMissionResponse> {
        let missions = self
            .ctx
            .clear_mission_repo()
            .find_by_member_and_date(member_id, day)
            .await?;

        let count = missions.len() as i64;
        Ok(DailyMissionResponse {
            date: day,
            missions: missions.into_iter().map(ClearMissionResponse::from).collect(),
            count,
        })
    }

    /// Per-day clear counts in a date range (weekly/monthly statistics)
    #[instrument(skip(self))]
    pub async fn mission_stats(
        &self,
        member_id: Snowflake,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ServiceResult<Vec<DailyClearCountResponse>> {
        if from > to {
            return Err(DomainError::InvalidDateWindow.into());
        }

        let stats = self
            .ctx
            .clear_mission_repo()
            .daily_stats(member_id, from, to)
            .await?;

        Ok(stats
            .into_iter()
            .map(|s| DailyClearCountResponse {
                day: s.day,
                count: s.count,
            })
            .collect())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn require_member(&self, member_id: Snowflake) -> ServiceResult<Member> {
        self.ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| DomainError::MemberNotFound(member_id).into())
    }

    async fn user_info(&self, member: Member) -> ServiceResult<UserInfoResponse> {
        let total_clear = self.ctx.clear_mission_repo().count_by_member(member.id).await?;
        Ok(UserInfoResponse::from(MemberWithStats { member, total_clear }))
    }
}
