//! Database row models (SQLx `FromRow`)

mod community;
mod member;
mod mission;
mod proof;

pub use community::{CommunityModel, ParticipantModel};
pub use member::MemberModel;
pub use mission::{ClearMissionModel, DailyClearCountModel};
pub use proof::{CommentModel, HeartModel, ProofCountsModel, ProofImageModel, ProofModel};
