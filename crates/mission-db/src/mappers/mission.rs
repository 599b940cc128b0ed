//! ClearMission entity <-> model mappers

use mission_core::entities::ClearMission;
use mission_core::traits::DailyClearCount;
use mission_core::value_objects::Snowflake;

use crate::models::{ClearMissionModel, DailyClearCountModel};

impl From<ClearMissionModel> for ClearMission {
    fn from(model: ClearMissionModel) -> Self {
        ClearMission {
            id: Snowflake::new(model.id),
            member_id: Snowflake::new(model.member_id),
            mission_name: model.mission_name,
            cleared_on: model.cleared_on,
            created_at: model.created_at,
        }
    }
}

impl From<DailyClearCountModel> for DailyClearCount {
    fn from(model: DailyClearCountModel) -> Self {
        DailyClearCount {
            day: model.day,
            count: model.count,
        }
    }
}
