//! Domain entities - core business objects

mod community;
mod member;
mod mission;
mod proof;

pub use community::{Community, Participant};
pub use member::{LoginProvider, Member};
pub use mission::ClearMission;
pub use proof::{Comment, Heart, Proof, ProofCounts, ProofImage};
