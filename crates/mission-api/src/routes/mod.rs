//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, communities, health, members, proofs};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate
/// middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(member_routes())
        .merge(community_routes())
        .merge(proof_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members/@me", get(members::my_page))
        .route("/members/@me", delete(members::withdraw))
        .route("/members/@me/nickname", patch(members::update_nickname))
        .route("/members/@me/privacy", patch(members::toggle_privacy))
        .route("/members/@me/profile-image", patch(members::change_profile_image))
        .route("/members/@me/communities", get(members::joined_communities))
        .route("/members/@me/missions", post(members::record_clear))
        .route("/members/@me/missions/stats", get(members::mission_stats))
        .route("/members/@me/missions/:date", get(members::target_day_missions))
        .route("/members/nickname/check", get(members::check_nickname))
        .route("/members/:member_id", get(members::get_member))
}

/// Community routes
fn community_routes() -> Router<AppState> {
    Router::new()
        .route("/communities", post(communities::create_community))
        .route("/communities/:community_id", get(communities::get_community))
        .route("/communities/:community_id/join", post(communities::join_community))
        // Proofs scoped to a community
        .route("/communities/:community_id/proofs", get(proofs::list_proofs))
        .route("/communities/:community_id/proofs", post(proofs::create_proof))
        .route(
            "/communities/:community_id/proofs/counts",
            get(proofs::count_all_proofs),
        )
}

/// Proof routes
fn proof_routes() -> Router<AppState> {
    Router::new()
        .route("/proofs/:proof_id", get(proofs::get_proof))
        .route("/proofs/:proof_id", patch(proofs::update_proof))
        .route("/proofs/:proof_id", delete(proofs::delete_proof))
        .route("/proofs/:proof_id/counts", get(proofs::count_proof))
        .route("/proofs/:proof_id/heart", post(proofs::toggle_heart))
        .route("/proofs/:proof_id/comments", get(proofs::list_comments))
        .route("/proofs/:proof_id/comments", post(proofs::create_comment))
        .route("/comments/:comment_id", delete(proofs::delete_comment))
}
