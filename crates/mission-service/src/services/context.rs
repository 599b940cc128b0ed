//! Service context - dependency container for services
//!
//! Holds all repositories, the object storage, the refresh-token store, and
//! other dependencies needed by services.

use std::sync::Arc;

use mission_cache::{RefreshTokenStore, SharedRedisPool};
use mission_common::auth::JwtService;
use mission_core::traits::{
    ClearMissionRepository, CommentRepository, CommunityRepository, HeartRepository,
    MemberRepository, ObjectStorage, ParticipantRepository, ProofImageRepository, ProofRepository,
};
use mission_core::SnowflakeGenerator;
use mission_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (kept for health checks)
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Repositories
    member_repo: Arc<dyn MemberRepository>,
    community_repo: Arc<dyn CommunityRepository>,
    participant_repo: Arc<dyn ParticipantRepository>,
    proof_repo: Arc<dyn ProofRepository>,
    proof_image_repo: Arc<dyn ProofImageRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    heart_repo: Arc<dyn HeartRepository>,
    clear_mission_repo: Arc<dyn ClearMissionRepository>,

    // Object storage
    storage: Arc<dyn ObjectStorage>,

    // Cache stores
    refresh_token_store: RefreshTokenStore,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        redis_pool: SharedRedisPool,
        member_repo: Arc<dyn MemberRepository>,
        community_repo: Arc<dyn CommunityRepository>,
        participant_repo: Arc<dyn ParticipantRepository>,
        proof_repo: Arc<dyn ProofRepository>,
        proof_image_repo: Arc<dyn ProofImageRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        heart_repo: Arc<dyn HeartRepository>,
        clear_mission_repo: Arc<dyn ClearMissionRepository>,
        storage: Arc<dyn ObjectStorage>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        let refresh_token_store = RefreshTokenStore::new((*redis_pool).clone());

        Self {
            pool,
            redis_pool,
            member_repo,
            community_repo,
            participant_repo,
            proof_repo,
            proof_image_repo,
            comment_repo,
            heart_repo,
            clear_mission_repo,
            storage,
            refresh_token_store,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the community repository
    pub fn community_repo(&self) -> &dyn CommunityRepository {
        self.community_repo.as_ref()
    }

    /// Get the participant repository
    pub fn participant_repo(&self) -> &dyn ParticipantRepository {
        self.participant_repo.as_ref()
    }

    /// Get the proof repository
    pub fn proof_repo(&self) -> &dyn ProofRepository {
        self.proof_repo.as_ref()
    }

    /// Get the proof image repository
    pub fn proof_image_repo(&self) -> &dyn ProofImageRepository {
        self.proof_image_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the heart repository
    pub fn heart_repo(&self) -> &dyn HeartRepository {
        self.heart_repo.as_ref()
    }

    /// Get the clear mission repository
    pub fn clear_mission_repo(&self) -> &dyn ClearMissionRepository {
        self.clear_mission_repo.as_ref()
    }

    // === Storage ===

    /// Get the object storage
    pub fn storage(&self) -> &dyn ObjectStorage {
        self.storage.as_ref()
    }

    // === Cache Stores ===

    /// Get the refresh token store
    pub fn refresh_token_store(&self) -> &RefreshTokenStore {
        &self.refresh_token_store
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> mission_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    community_repo: Option<Arc<dyn CommunityRepository>>,
    participant_repo: Option<Arc<dyn ParticipantRepository>>,
    proof_repo: Option<Arc<dyn ProofRepository>>,
    proof_image_repo: Option<Arc<dyn ProofImageRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    heart_repo: Option<Arc<dyn HeartRepository>>,
    clear_mission_repo: Option<Arc<dyn ClearMissionRepository>>,
    storage: Option<Arc<dyn ObjectStorage>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn community_repo(mut self, repo: Arc<dyn CommunityRepository>) -> Self {
        self.community_repo = Some(repo);
        self
    }

    pub fn participant_repo(mut self, repo: Arc<dyn ParticipantRepository>) -> Self {
        self.participant_repo = Some(repo);
        self
    }

    pub fn proof_repo(mut self, repo: Arc<dyn ProofRepository>) -> Self {
        self.proof_repo = Some(repo);
        self
    }

    pub fn proof_image_repo(mut self, repo: Arc<dyn ProofImageRepository>) -> Self {
        self.proof_image_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn heart_repo(mut self, repo: Arc<dyn HeartRepository>) -> Self {
        self.heart_repo = Some(repo);
        self
    }

    pub fn clear_mission_repo(mut self, repo: Arc<dyn ClearMissionRepository>) -> Self {
        self.clear_mission_repo = Some(repo);
        self
    }

    pub fn storage(mut self, storage: Arc<dyn ObjectStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.community_repo
                .ok_or_else(|| ServiceError::validation("community_repo is required"))?,
            self.participant_repo
                .ok_or_else(|| ServiceError::validation("participant_repo is required"))?,
            self.proof_repo
                .ok_or_else(|| ServiceError::validation("proof_repo is required"))?,
            self.proof_image_repo
                .ok_or_else(|| ServiceError::validation("proof_image_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            self.heart_repo
                .ok_or_else(|| ServiceError::validation("heart_repo is required"))?,
            self.clear_mission_repo
                .ok_or_else(|| ServiceError::validation("clear_mission_repo is required"))?,
            self.storage
                .ok_or_else(|| ServiceError::validation("storage is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
