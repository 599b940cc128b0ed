//! Authentication handlers
//!
//! Token reissue and logout. Social login redirects live in the external
//! OAuth flow and are not part of this API.

use axum::{extract::State, Json};
use mission_service::{AuthService, RefreshTokenRequest, TokenResponse};

use crate::extractors::AuthMember;
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Reissue a token pair from a refresh token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let service = AuthService::new(state.service_context());
    let tokens = service.refresh(&request.refresh_token).await?;
    Ok(Json(tokens))
}

/// Log out (revoke the caller's refresh token)
///
/// POST /auth/logout
pub async fn logout(State(state): State<AppState>, auth: AuthMember) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.logout(auth.member_id).await?;
    Ok(NoContent)
}
