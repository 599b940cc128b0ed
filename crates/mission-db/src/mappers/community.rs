//! Community entity <-> model mappers

use mission_core::entities::{Community, Participant};
use mission_core::value_objects::Snowflake;

use crate::models::{CommunityModel, ParticipantModel};

impl From<CommunityModel> for Community {
    fn from(model: CommunityModel) -> Self {
        Community {
            id: Snowflake::new(model.id),
            title: model.title,
            image: model.image,
            creator_id: Snowflake::new(model.creator_id),
            capacity: model.capacity,
            score_target: model.score_target,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ParticipantModel> for Participant {
    fn from(model: ParticipantModel) -> Self {
        Participant {
            community_id: Snowflake::new(model.community_id),
            member_id: Snowflake::new(model.member_id),
            joined_at: model.joined_at,
        }
    }
}
