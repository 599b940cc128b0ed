//! Community handlers
//!
//! Endpoints for group missions: creation, detail, joining.

use axum::{
    extract::{Path, State},
    Json,
};
use mission_service::{CommunityResponse, CommunityService, CreateCommunityRequest};

use crate::extractors::{AuthMember, CommunityIdPath, OptionalAuthMember, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a community (the creator joins it immediately)
///
/// POST /communities
pub async fn create_community(
    State(state): State<AppState>,
    auth: AuthMember,
    ValidatedJson(request): ValidatedJson<CreateCommunityRequest>,
) -> ApiResult<Created<Json<CommunityResponse>>> {
    let service = CommunityService::new(state.service_context());
    let community = service.create_community(auth.member_id, request).await?;
    Ok(Created(Json(community)))
}

/// Community detail with fill/success percentages and date status
///
/// GET /communities/{community_id}
pub async fn get_community(
    State(state): State<AppState>,
    auth: OptionalAuthMember,
    Path(path): Path<CommunityIdPath>,
) -> ApiResult<Json<CommunityResponse>> {
    let community_id = path.community_id()?;

    let service = CommunityService::new(state.service_context());
    let community = service.get_community(community_id, auth.member_id()).await?;
    Ok(Json(community))
}

/// Join a community
///
/// POST /communities/{community_id}/join
pub async fn join_community(
    State(state): State<AppState>,
    auth: AuthMember,
    Path(path): Path<CommunityIdPath>,
) -> ApiResult<NoContent> {
    let community_id = path.community_id()?;

    let service = CommunityService::new(state.service_context());
    service.join_community(community_id, auth.member_id).await?;
    Ok(NoContent)
}
