//! Authentication service
//!
//! Token reissue and logout. Social login itself happens in the external
//! OAuth flow; this service only rotates and revokes the refresh tokens that
//! flow hands out.

use mission_cache::RefreshTokenData;
use mission_common::AppError;
use mission_core::DomainError;
use mission_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::TokenResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reissue a token pair from a valid refresh token.
    ///
    /// The presented token must match the one stored for the member; the
    /// stored token rotates on every reissue.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh(&self, refresh_token: &str) -> ServiceResult<TokenResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(refresh_token)?;
        let member_id = claims.member_id()?;

        if !self
            .ctx
            .refresh_token_store()
            .matches(member_id, refresh_token)
            .await?
        {
            warn!(member_id = %member_id, "Refresh token does not match stored session");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        // The member may have changed nickname since issuance
        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(DomainError::MemberNotFound(member_id))?;

        let pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(member.id, &member.nickname)?;

        self.ctx
            .refresh_token_store()
            .store(&RefreshTokenData::new(member.id, pair.refresh_token.clone()))
            .await?;

        info!(member_id = %member.id, "Token pair reissued");

        Ok(TokenResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
            expires_in: pair.expires_in,
        })
    }

    /// Log out by revoking the stored refresh token
    #[instrument(skip(self))]
    pub async fn logout(&self, member_id: Snowflake) -> ServiceResult<()> {
        let revoked = self.ctx.refresh_token_store().revoke(member_id).await?;

        if !revoked {
            return Err(ServiceError::App(AppError::MissingAuth));
        }

        info!(member_id = %member_id, "Logged out");

        Ok(())
    }
}
