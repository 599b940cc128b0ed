//! PostgreSQL repository implementations

mod clear_mission;
mod comment;
mod community;
mod error;
mod heart;
mod member;
mod participant;
mod proof;

pub use clear_mission::PgClearMissionRepository;
pub use comment::PgCommentRepository;
pub use community::PgCommunityRepository;
pub use heart::PgHeartRepository;
pub use member::PgMemberRepository;
pub use participant::PgParticipantRepository;
pub use proof::{PgProofImageRepository, PgProofRepository};
