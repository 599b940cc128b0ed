//! Ports - interfaces the domain needs from infrastructure

mod repositories;
mod storage;

pub use repositories::{
    ClearMissionRepository, CommentRepository, CommunityRepository, DailyClearCount,
    HeartRepository, MemberRepository, PageQuery, ParticipantRepository, ProofImageRepository,
    ProofRepository, RepoResult,
};
pub use storage::{ObjectStorage, StorageResult, StoredObject, UploadFile};
