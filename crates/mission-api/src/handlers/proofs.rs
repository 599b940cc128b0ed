//! Proof handlers
//!
//! Endpoints for the proof aggregate: listing, CRUD, counts, comments, and
//! the heart toggle.

use axum::{
    extract::{Path, State},
    Json,
};
use mission_service::{
    CommentResponse, CreateCommentRequest, CreateProofRequest, HeartToggleResponse,
    ProofCountResponse, ProofResponse, ProofService, UpdateProofRequest,
};

use crate::extractors::{
    AuthMember, CommentIdPath, CommunityIdPath, MultipartPayload, OptionalAuthMember, Pagination,
    ProofIdPath, ValidatedJson,
};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List proofs of a community (1-based `page`, `size` query parameters)
///
/// GET /communities/{community_id}/proofs
pub async fn list_proofs(
    State(state): State<AppState>,
    auth: OptionalAuthMember,
    Path(path): Path<CommunityIdPath>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<ProofResponse>>> {
    let community_id = path.community_id()?;

    let service = ProofService::new(state.service_context());
    let proofs = service
        .list_proofs(community_id, pagination.page, pagination.size, auth.member_id())
        .await?;
    Ok(Json(proofs))
}

/// Get a single proof
///
/// GET /proofs/{proof_id}
pub async fn get_proof(
    State(state): State<AppState>,
    auth: OptionalAuthMember,
    Path(path): Path<ProofIdPath>,
) -> ApiResult<Json<ProofResponse>> {
    let proof_id = path.proof_id()?;

    let service = ProofService::new(state.service_context());
    let proof = service.get_proof(proof_id, auth.member_id()).await?;
    Ok(Json(proof))
}

/// Create a proof (multipart: `payload` JSON + `files`)
///
/// POST /communities/{community_id}/proofs
pub async fn create_proof(
    State(state): State<AppState>,
    auth: AuthMember,
    Path(path): Path<CommunityIdPath>,
    form: MultipartPayload<CreateProofRequest>,
) -> ApiResult<Created<Json<ProofResponse>>> {
    let community_id = path.community_id()?;

    let service = ProofService::new(state.service_context());
    let proof = service
        .create_proof(
            community_id,
            auth.member_id,
            &auth.nickname,
            form.payload,
            form.files,
        )
        .await?;
    Ok(Created(Json(proof)))
}

/// Update a proof (multipart: `payload` JSON + `files` paired with image ids)
///
/// PATCH /proofs/{proof_id}
pub async fn update_proof(
    State(state): State<AppState>,
    auth: AuthMember,
    Path(path): Path<ProofIdPath>,
    form: MultipartPayload<UpdateProofRequest>,
) -> ApiResult<Json<ProofResponse>> {
    let proof_id = path.proof_id()?;

    let service = ProofService::new(state.service_context());
    let proof = service
        .update_proof(proof_id, auth.member_id, form.payload, form.files)
        .await?;
    Ok(Json(proof))
}

/// Delete a proof (author only)
///
/// DELETE /proofs/{proof_id}
pub async fn delete_proof(
    State(state): State<AppState>,
    auth: AuthMember,
    Path(path): Path<ProofIdPath>,
) -> ApiResult<NoContent> {
    let proof_id = path.proof_id()?;

    let service = ProofService::new(state.service_context());
    service.delete_proof(proof_id, auth.member_id).await?;
    Ok(NoContent)
}

/// Comment/heart counts for every proof of a community
///
/// GET /communities/{community_id}/proofs/counts
pub async fn count_all_proofs(
    State(state): State<AppState>,
    Path(path): Path<CommunityIdPath>,
) -> ApiResult<Json<Vec<ProofCountResponse>>> {
    let community_id = path.community_id()?;

    let service = ProofService::new(state.service_context());
    let counts = service.count_all_proofs(community_id).await?;
    Ok(Json(counts))
}

/// Comment/heart counts for one proof
///
/// GET /proofs/{proof_id}/counts
pub async fn count_proof(
    State(state): State<AppState>,
    Path(path): Path<ProofIdPath>,
) -> ApiResult<Json<ProofCountResponse>> {
    let proof_id = path.proof_id()?;

    let service = ProofService::new(state.service_context());
    let counts = service.count_proof(proof_id).await?;
    Ok(Json(counts))
}

/// Toggle the caller's heart on a proof
///
/// POST /proofs/{proof_id}/heart
pub async fn toggle_heart(
    State(state): State<AppState>,
    auth: AuthMember,
    Path(path): Path<ProofIdPath>,
) -> ApiResult<Json<HeartToggleResponse>> {
    let proof_id = path.proof_id()?;

    let service = ProofService::new(state.service_context());
    let result = service.toggle_heart(proof_id, auth.member_id).await?;
    Ok(Json(result))
}

/// List comments of a proof
///
/// GET /proofs/{proof_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(path): Path<ProofIdPath>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let proof_id = path.proof_id()?;

    let service = ProofService::new(state.service_context());
    let comments = service.list_comments(proof_id).await?;
    Ok(Json(comments))
}

/// Add a comment to a proof
///
/// POST /proofs/{proof_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthMember,
    Path(path): Path<ProofIdPath>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let proof_id = path.proof_id()?;

    let service = ProofService::new(state.service_context());
    let comment = service
        .create_comment(proof_id, auth.member_id, &auth.nickname, request)
        .await?;
    Ok(Created(Json(comment)))
}

/// Delete a comment (author only)
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthMember,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<NoContent> {
    let comment_id = path.comment_id()?;

    let service = ProofService::new(state.service_context());
    service.delete_comment(comment_id, auth.member_id).await?;
    Ok(NoContent)
}
