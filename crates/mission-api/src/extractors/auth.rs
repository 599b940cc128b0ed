//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header. The
//! claims carry the caller's member ID and nickname, which together form the
//! auth context services receive.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use mission_core::Snowflake;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated member extracted from a JWT access token
#[derive(Debug, Clone)]
pub struct AuthMember {
    /// Member ID from the JWT token
    pub member_id: Snowflake,
    /// Nickname carried in the claims
    pub nickname: String,
}

impl AuthMember {
    /// Create a new AuthMember
    pub fn new(member_id: Snowflake, nickname: String) -> Self {
        Self { member_id, nickname }
    }
}

fn validate_bearer<S>(state: &S, token: &str) -> Result<AuthMember, ApiError>
where
    AppState: FromRef<S>,
{
    let app_state = AppState::from_ref(state);

    let claims = app_state
        .jwt_service()
        .validate_access_token(token)
        .map_err(|e| {
            tracing::warn!(error = %e, "Invalid access token");
            ApiError::InvalidAuthFormat
        })?;

    let member_id = claims.member_id().map_err(|e| {
        tracing::warn!(error = %e, "Invalid member ID in token");
        ApiError::InvalidAuthFormat
    })?;

    Ok(AuthMember::new(member_id, claims.nickname))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthMember
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        validate_bearer(state, bearer.token())
    }
}

/// Optional authenticated member
///
/// Returns None if no authorization header is present,
/// or an error if the token is invalid.
#[derive(Debug, Clone)]
pub struct OptionalAuthMember(pub Option<AuthMember>);

impl OptionalAuthMember {
    /// The caller's member ID, if authenticated
    pub fn member_id(&self) -> Option<Snowflake> {
        self.0.as_ref().map(|auth| auth.member_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthMember
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        match auth_result {
            Ok(TypedHeader(Authorization(bearer))) => {
                Ok(OptionalAuthMember(Some(validate_bearer(state, bearer.token())?)))
            }
            Err(_) => Ok(OptionalAuthMember(None)),
        }
    }
}
