//! Test fixtures and data generators
//!
//! Members normally come out of the external social-login flow, so tests
//! seed them straight through the repository layer and mint their tokens
//! with the same JWT secret the server uses.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use chrono::NaiveDate;
use mission_common::{AppConfig, JwtService};
use mission_core::entities::{Community, LoginProvider, Member};
use mission_core::traits::{CommunityRepository, MemberRepository, ParticipantRepository};
use mission_core::{Participant, Snowflake, SnowflakeGenerator};
use mission_db::{PgCommunityRepository, PgMemberRepository, PgParticipantRepository, PgPool};
use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Snowflake generator for fixture IDs (worker 9 keeps them apart from the
/// server's own IDs)
fn fixture_id() -> Snowflake {
    use std::sync::OnceLock;
    static GENERATOR: OnceLock<SnowflakeGenerator> = OnceLock::new();
    GENERATOR.get_or_init(|| SnowflakeGenerator::new(9)).generate()
}

/// Seed a member directly through the repository layer
pub async fn seed_member(pool: &PgPool) -> Result<Member> {
    let suffix = unique_suffix();
    let member = Member::new(
        fixture_id(),
        format!("tester{suffix}"),
        format!("Tester {suffix}"),
        LoginProvider::Kakao,
    );
    PgMemberRepository::new(pool.clone())
        .create(&member)
        .await
        .map_err(|e| anyhow::anyhow!("seed member: {e}"))?;
    Ok(member)
}

/// Seed a community created (and joined) by the given member
pub async fn seed_community(pool: &PgPool, creator: &Member) -> Result<Community> {
    let community = Community::new(
        fixture_id(),
        format!("mission {}", unique_suffix()),
        creator.id,
        8,
        30,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2030, 12, 31).unwrap(),
    )
    .map_err(|e| anyhow::anyhow!("seed community: {e}"))?;

    PgCommunityRepository::new(pool.clone())
        .create(&community)
        .await
        .map_err(|e| anyhow::anyhow!("seed community: {e}"))?;
    PgParticipantRepository::new(pool.clone())
        .create(&Participant::new(community.id, creator.id))
        .await
        .map_err(|e| anyhow::anyhow!("seed participant: {e}"))?;

    Ok(community)
}

/// Mint an access token for a seeded member
pub fn token_for(config: &AppConfig, member: &Member) -> Result<String> {
    let jwt = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    );
    let pair = jwt
        .generate_token_pair(member.id, &member.nickname)
        .map_err(|e| anyhow::anyhow!("token: {e}"))?;
    Ok(pair.access_token)
}

/// Multipart form for proof creation
pub fn proof_form(title: &str, content: &str, files: &[(&str, &[u8])]) -> reqwest::multipart::Form {
    let payload = serde_json::json!({ "title": title, "content": content }).to_string();
    let mut form = reqwest::multipart::Form::new().text("payload", payload);
    for (name, bytes) in files {
        form = form.part(
            "files",
            reqwest::multipart::Part::bytes(bytes.to_vec())
                .file_name((*name).to_string())
                .mime_str("image/jpeg")
                .expect("mime"),
        );
    }
    form
}

// ============================================================================
// Response shapes (deserialization mirrors of the API responses)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ProofImageResponse {
    pub image_id: String,
    pub url: String,
    pub file_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProofResponse {
    pub proof_id: String,
    pub title: String,
    pub content: String,
    pub author_nickname: String,
    pub images: Vec<ProofImageResponse>,
    pub comment_count: i64,
    pub heart_count: i64,
    pub is_writer: bool,
    pub has_liked: bool,
}

#[derive(Debug, Deserialize)]
pub struct HeartToggleResponse {
    pub proof_id: String,
    pub liked: bool,
    pub heart_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct ProofCountResponse {
    pub proof_id: String,
    pub comment_count: i64,
    pub heart_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct UserInfoResponse {
    pub id: String,
    pub nickname: String,
    pub level: i32,
    pub total_clear: i64,
    pub is_secret: bool,
    pub login_type: String,
}

#[derive(Debug, Deserialize)]
pub struct CommunityResponse {
    pub community_id: String,
    pub title: String,
    pub is_creator: bool,
    pub fill_percent: f64,
    pub success_percent: f64,
    pub date_status: String,
}

#[derive(Debug, Serialize)]
pub struct CreateCommentBody {
    pub content: String,
}
