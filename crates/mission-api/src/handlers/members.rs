//! Member handlers
//!
//! Profile, nickname, privacy, withdrawal, and cleared-mission endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use mission_service::{
    ClearMissionResponse, CommunityService, DailyClearCountResponse, DailyMissionResponse,
    JoinedCommunityResponse, MemberService, NicknameRequest, NicknameResponse, RecordClearRequest,
    UserInfoResponse,
};
use serde::Deserialize;

use crate::extractors::{AuthMember, MemberIdPath, OptionalAuthMember, SingleFile, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// The caller's own profile
///
/// GET /members/@me
pub async fn my_page(
    State(state): State<AppState>,
    auth: AuthMember,
) -> ApiResult<Json<UserInfoResponse>> {
    let service = MemberService::new(state.service_context());
    let info = service.my_page(auth.member_id).await?;
    Ok(Json(info))
}

/// Another member's profile (secret profiles are closed to non-owners)
///
/// GET /members/{member_id}
pub async fn get_member(
    State(state): State<AppState>,
    auth: OptionalAuthMember,
    Path(path): Path<MemberIdPath>,
) -> ApiResult<Json<UserInfoResponse>> {
    let member_id = path.member_id()?;

    let service = MemberService::new(state.service_context());
    let info = service.get_user_info(member_id, auth.member_id()).await?;
    Ok(Json(info))
}

/// Nickname availability query string
#[derive(Debug, Deserialize)]
pub struct NicknameQuery {
    pub nickname: String,
}

/// Check nickname availability (true = free)
///
/// GET /members/nickname/check?nickname=...
pub async fn check_nickname(
    State(state): State<AppState>,
    Query(query): Query<NicknameQuery>,
) -> ApiResult<Json<bool>> {
    let service = MemberService::new(state.service_context());
    let available = service.check_nickname(&query.nickname).await?;
    Ok(Json(available))
}

/// Change the caller's nickname
///
/// PATCH /members/@me/nickname
pub async fn update_nickname(
    State(state): State<AppState>,
    auth: AuthMember,
    ValidatedJson(request): ValidatedJson<NicknameRequest>,
) -> ApiResult<Json<NicknameResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.update_nickname(auth.member_id, request).await?;
    Ok(Json(response))
}

/// Flip the caller's privacy flag, returning the new value
///
/// PATCH /members/@me/privacy
pub async fn toggle_privacy(
    State(state): State<AppState>,
    auth: AuthMember,
) -> ApiResult<Json<bool>> {
    let service = MemberService::new(state.service_context());
    let is_secret = service.toggle_privacy(auth.member_id).await?;
    Ok(Json(is_secret))
}

/// Upload a new profile image (multipart `files` part)
///
/// PATCH /members/@me/profile-image
pub async fn change_profile_image(
    State(state): State<AppState>,
    auth: AuthMember,
    SingleFile(file): SingleFile,
) -> ApiResult<Json<String>> {
    let service = MemberService::new(state.service_context());
    let url = service.change_profile_image(auth.member_id, file).await?;
    Ok(Json(url))
}

/// Withdraw from the service
///
/// DELETE /members/@me
pub async fn withdraw(State(state): State<AppState>, auth: AuthMember) -> ApiResult<NoContent> {
    let service = MemberService::new(state.service_context());
    service.withdraw(auth.member_id).await?;
    Ok(NoContent)
}

/// The caller's joined group missions with progress figures
///
/// GET /members/@me/communities
pub async fn joined_communities(
    State(state): State<AppState>,
    auth: AuthMember,
) -> ApiResult<Json<Vec<JoinedCommunityResponse>>> {
    let service = CommunityService::new(state.service_context());
    let communities = service.joined_communities(auth.member_id).await?;
    Ok(Json(communities))
}

/// Record a cleared mission
///
/// POST /members/@me/missions
pub async fn record_clear(
    State(state): State<AppState>,
    auth: AuthMember,
    ValidatedJson(request): ValidatedJson<RecordClearRequest>,
) -> ApiResult<Created<Json<ClearMissionResponse>>> {
    let service = MemberService::new(state.service_context());
    let clear = service.record_clear(auth.member_id, request).await?;
    Ok(Created(Json(clear)))
}

/// Date path parameter (ISO 8601)
#[derive(Debug, Deserialize)]
pub struct DatePath {
    pub date: String,
}

/// The caller's cleared missions on one day
///
/// GET /members/@me/missions/{date}
pub async fn target_day_missions(
    State(state): State<AppState>,
    auth: AuthMember,
    Path(path): Path<DatePath>,
) -> ApiResult<Json<DailyMissionResponse>> {
    let day: NaiveDate = path
        .date
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid date format, expected YYYY-MM-DD"))?;

    let service = MemberService::new(state.service_context());
    let missions = service.target_day_missions(auth.member_id, day).await?;
    Ok(Json(missions))
}

/// Date-range query for mission statistics
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub from: String,
    pub to: String,
}

/// Per-day clear counts in a date range (weekly/monthly statistics)
///
/// GET /members/@me/missions/stats?from=...&to=...
pub async fn mission_stats(
    State(state): State<AppState>,
    auth: AuthMember,
    Query(query): Query<StatsQuery>,
) -> ApiResult<Json<Vec<DailyClearCountResponse>>> {
    let from: NaiveDate = query
        .from
        .parse()
        .map_err(|_| ApiError::invalid_query("Invalid 'from' date, expected YYYY-MM-DD"))?;
    let to: NaiveDate = query
        .to
        .parse()
        .map_err(|_| ApiError::invalid_query("Invalid 'to' date, expected YYYY-MM-DD"))?;

    let service = MemberService::new(state.service_context());
    let stats = service.mission_stats(auth.member_id, from, to).await?;
    Ok(Json(stats))
}
