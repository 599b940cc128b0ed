//! Member entity <-> model mapper

use mission_core::entities::{LoginProvider, Member};
use mission_core::value_objects::Snowflake;

use crate::models::MemberModel;

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: Snowflake::new(model.id),
            nickname: model.nickname,
            username: model.username,
            profile_image: model.profile_image,
            level: model.level,
            exp: model.exp,
            is_secret: model.is_secret,
            // The column carries a CHECK constraint; an unknown tag can only
            // come from a schema migration gap
            login_provider: LoginProvider::parse(&model.login_provider)
                .unwrap_or(LoginProvider::Kakao),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
