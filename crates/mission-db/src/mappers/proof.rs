//! Proof aggregate entity <-> model mappers

use mission_core::entities::{Comment, Heart, Proof, ProofCounts, ProofImage};
use mission_core::value_objects::Snowflake;

use crate::models::{CommentModel, HeartModel, ProofCountsModel, ProofImageModel, ProofModel};

impl From<ProofModel> for Proof {
    fn from(model: ProofModel) -> Self {
        Proof {
            id: Snowflake::new(model.id),
            community_id: Snowflake::new(model.community_id),
            author_id: Snowflake::new(model.author_id),
            author_nickname: model.author_nickname,
            title: model.title,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ProofImageModel> for ProofImage {
    fn from(model: ProofImageModel) -> Self {
        ProofImage {
            id: Snowflake::new(model.id),
            proof_id: Snowflake::new(model.proof_id),
            url: model.url,
            file_name: model.file_name,
            position: model.position,
        }
    }
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: Snowflake::new(model.id),
            proof_id: Snowflake::new(model.proof_id),
            author_id: Snowflake::new(model.author_id),
            author_nickname: model.author_nickname,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

impl From<HeartModel> for Heart {
    fn from(model: HeartModel) -> Self {
        Heart {
            proof_id: Snowflake::new(model.proof_id),
            member_id: Snowflake::new(model.member_id),
            created_at: model.created_at,
        }
    }
}

impl From<ProofCountsModel> for ProofCounts {
    fn from(model: ProofCountsModel) -> Self {
        ProofCounts {
            proof_id: Snowflake::new(model.proof_id),
            comment_count: model.comment_count,
            heart_count: model.heart_count,
        }
    }
}
