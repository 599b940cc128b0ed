//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the mission-db schema applied
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, proof_form, seed_community, seed_member,
    token_for, CommunityResponse, HeartToggleResponse, ProofCountResponse, ProofResponse,
    TestServer, UserInfoResponse,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Proof Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_proof() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = mission_db::create_pool(&mission_db::DatabaseConfig {
        url: server.config.database.url.clone(),
        ..Default::default()
    })
    .await
    .expect("pool");

    let member = seed_member(&pool).await.unwrap();
    let community = seed_community(&pool, &member).await.unwrap();
    let token = token_for(&server.config, &member).unwrap();

    let form = proof_form("day 1", "ran 5km", &[("a.jpg", b"fakejpeg")]);
    let response = server
        .post_multipart(
            &format!("/api/v1/communities/{}/proofs", community.id),
            &token,
            form,
        )
        .await
        .unwrap();
    let created: ProofResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.title, "day 1");
    assert!(created.is_writer);
    assert!(!created.has_liked);
    assert_eq!(created.images.len(), 1);

    // Anonymous detail view: both flags false
    let response = server
        .get(&format!("/api/v1/proofs/{}", created.proof_id))
        .await
        .unwrap();
    let fetched: ProofResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!fetched.is_writer);
    assert!(!fetched.has_liked);
}

#[tokio::test]
async fn test_create_proof_requires_participation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = mission_db::create_pool(&mission_db::DatabaseConfig {
        url: server.config.database.url.clone(),
        ..Default::default()
    })
    .await
    .expect("pool");

    let creator = seed_member(&pool).await.unwrap();
    let outsider = seed_member(&pool).await.unwrap();
    let community = seed_community(&pool, &creator).await.unwrap();
    let token = token_for(&server.config, &outsider).unwrap();

    let form = proof_form("day 1", "ran 5km", &[]);
    let response = server
        .post_multipart(
            &format!("/api/v1/communities/{}/proofs", community.id),
            &token,
            form,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_heart_toggle_round_trip() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = mission_db::create_pool(&mission_db::DatabaseConfig {
        url: server.config.database.url.clone(),
        ..Default::default()
    })
    .await
    .expect("pool");

    let author = seed_member(&pool).await.unwrap();
    let liker = seed_member(&pool).await.unwrap();
    let community = seed_community(&pool, &author).await.unwrap();
    let author_token = token_for(&server.config, &author).unwrap();
    let liker_token = token_for(&server.config, &liker).unwrap();

    let form = proof_form("day 1", "done", &[]);
    let response = server
        .post_multipart(
            &format!("/api/v1/communities/{}/proofs", community.id),
            &author_token,
            form,
        )
        .await
        .unwrap();
    let created: ProofResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let heart_path = format!("/api/v1/proofs/{}/heart", created.proof_id);

    let response = server.post_auth_empty(&heart_path, &liker_token).await.unwrap();
    let first: HeartToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(first.liked);
    assert_eq!(first.heart_count, 1);

    let response = server.post_auth_empty(&heart_path, &liker_token).await.unwrap();
    let second: HeartToggleResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!second.liked);
    assert_eq!(second.heart_count, 0);
}

#[tokio::test]
async fn test_delete_by_non_author_is_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = mission_db::create_pool(&mission_db::DatabaseConfig {
        url: server.config.database.url.clone(),
        ..Default::default()
    })
    .await
    .expect("pool");

    let author = seed_member(&pool).await.unwrap();
    let other = seed_member(&pool).await.unwrap();
    let community = seed_community(&pool, &author).await.unwrap();
    let author_token = token_for(&server.config, &author).unwrap();
    let other_token = token_for(&server.config, &other).unwrap();

    let form = proof_form("day 1", "done", &[]);
    let response = server
        .post_multipart(
            &format!("/api/v1/communities/{}/proofs", community.id),
            &author_token,
            form,
        )
        .await
        .unwrap();
    let created: ProofResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let proof_path = format!("/api/v1/proofs/{}", created.proof_id);

    let response = server.delete_auth(&proof_path, &other_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Still there
    let response = server.get(&proof_path).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Author delete succeeds and the proof is gone
    let response = server.delete_auth(&proof_path, &author_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&proof_path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_proof_counts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = mission_db::create_pool(&mission_db::DatabaseConfig {
        url: server.config.database.url.clone(),
        ..Default::default()
    })
    .await
    .expect("pool");

    let author = seed_member(&pool).await.unwrap();
    let community = seed_community(&pool, &author).await.unwrap();
    let token = token_for(&server.config, &author).unwrap();

    let form = proof_form("day 1", "done", &[]);
    let response = server
        .post_multipart(
            &format!("/api/v1/communities/{}/proofs", community.id),
            &token,
            form,
        )
        .await
        .unwrap();
    let created: ProofResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server
        .post_auth(
            &format!("/api/v1/proofs/{}/comments", created.proof_id),
            &token,
            &integration_tests::CreateCommentBody {
                content: "nice".to_string(),
            },
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/proofs/{}/counts", created.proof_id))
        .await
        .unwrap();
    let counts: ProofCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.comment_count, 1);
    assert_eq!(counts.heart_count, 0);
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_secret_profile_is_closed() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = mission_db::create_pool(&mission_db::DatabaseConfig {
        url: server.config.database.url.clone(),
        ..Default::default()
    })
    .await
    .expect("pool");

    let target = seed_member(&pool).await.unwrap();
    let viewer = seed_member(&pool).await.unwrap();
    let target_token = token_for(&server.config, &target).unwrap();
    let viewer_token = token_for(&server.config, &viewer).unwrap();

    // Close the profile
    let response = server
        .patch_auth("/api/v1/members/@me/privacy", &target_token, &())
        .await
        .unwrap();
    let is_secret: bool = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(is_secret);

    // Other members are shut out
    let response = server
        .get_auth(&format!("/api/v1/members/{}", target.id), &viewer_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner still sees their own page
    let response = server
        .get_auth("/api/v1/members/@me", &target_token)
        .await
        .unwrap();
    let info: UserInfoResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(info.is_secret);
    assert_eq!(info.nickname, target.nickname);
}

#[tokio::test]
async fn test_nickname_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = mission_db::create_pool(&mission_db::DatabaseConfig {
        url: server.config.database.url.clone(),
        ..Default::default()
    })
    .await
    .expect("pool");

    let member = seed_member(&pool).await.unwrap();
    let other = seed_member(&pool).await.unwrap();
    let token = token_for(&server.config, &member).unwrap();

    let response = server
        .patch_auth(
            "/api/v1/members/@me/nickname",
            &token,
            &serde_json::json!({ "nickname": other.nickname }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Community Tests
// ============================================================================

#[tokio::test]
async fn test_joined_communities_report_progress() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = mission_db::create_pool(&mission_db::DatabaseConfig {
        url: server.config.database.url.clone(),
        ..Default::default()
    })
    .await
    .expect("pool");

    let member = seed_member(&pool).await.unwrap();
    let community = seed_community(&pool, &member).await.unwrap();
    let token = token_for(&server.config, &member).unwrap();

    let response = server
        .get_auth("/api/v1/members/@me/communities", &token)
        .await
        .unwrap();
    let joined: Vec<CommunityResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let entry = joined
        .iter()
        .find(|c| c.community_id == community.id.to_string())
        .expect("seeded community in list");
    assert!(entry.is_creator);
    assert_eq!(entry.date_status, "IN_PROGRESS");
}

#[tokio::test]
async fn test_join_twice_is_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = mission_db::create_pool(&mission_db::DatabaseConfig {
        url: server.config.database.url.clone(),
        ..Default::default()
    })
    .await
    .expect("pool");

    let member = seed_member(&pool).await.unwrap();
    let community = seed_community(&pool, &member).await.unwrap();
    let token = token_for(&server.config, &member).unwrap();

    let response = server
        .post_auth_empty(&format!("/api/v1/communities/{}/join", community.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_protected_routes_require_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/members/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
