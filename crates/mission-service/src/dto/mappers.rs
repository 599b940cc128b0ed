//! Entity → DTO mappers
//!
//! Helper structs bundle an entity with the query results needed to project
//! it, so `From` impls stay plain value assembly.

use mission_core::entities::{Comment, Community, Member, Proof, ProofCounts, ProofImage};
use mission_core::{progress, ClearMission, DateStatus};

use super::responses::{
    ClearMissionResponse, CommentResponse, CommunityResponse, JoinedCommunityResponse,
    ProofCountResponse, ProofImageResponse, ProofResponse, UserInfoResponse,
};

/// A proof with everything its projection needs
#[derive(Debug)]
pub struct ProofWithDetails {
    pub proof: Proof,
    pub images: Vec<ProofImage>,
    pub comment_count: i64,
    pub heart_count: i64,
    pub is_writer: bool,
    pub has_liked: bool,
}

impl From<ProofWithDetails> for ProofResponse {
    fn from(details: ProofWithDetails) -> Self {
        ProofResponse {
            proof_id: details.proof.id,
            title: details.proof.title,
            content: details.proof.content,
            author_nickname: details.proof.author_nickname,
            images: details.images.into_iter().map(ProofImageResponse::from).collect(),
            comment_count: details.comment_count,
            heart_count: details.heart_count,
            is_writer: details.is_writer,
            has_liked: details.has_liked,
            created_at: details.proof.created_at,
        }
    }
}

impl From<ProofImage> for ProofImageResponse {
    fn from(image: ProofImage) -> Self {
        ProofImageResponse {
            image_id: image.id,
            url: image.url,
            file_name: image.file_name,
        }
    }
}

impl From<ProofCounts> for ProofCountResponse {
    fn from(counts: ProofCounts) -> Self {
        ProofCountResponse {
            proof_id: counts.proof_id,
            comment_count: counts.comment_count,
            heart_count: counts.heart_count,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        CommentResponse {
            comment_id: comment.id,
            proof_id: comment.proof_id,
            author_nickname: comment.author_nickname,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

/// A community with its derived progress figures
#[derive(Debug)]
pub struct CommunityWithProgress {
    pub community: Community,
    pub is_creator: bool,
    pub fill_percent: f64,
    pub success_percent: f64,
    pub date_status: DateStatus,
}

impl From<CommunityWithProgress> for CommunityResponse {
    fn from(details: CommunityWithProgress) -> Self {
        CommunityResponse {
            community_id: details.community.id,
            title: details.community.title,
            image: details.community.image,
            is_creator: details.is_creator,
            capacity: details.community.capacity,
            score_target: details.community.score_target,
            fill_percent: details.fill_percent,
            success_percent: details.success_percent,
            start_date: details.community.start_date,
            end_date: details.community.end_date,
            date_status: details.date_status,
        }
    }
}

impl From<CommunityWithProgress> for JoinedCommunityResponse {
    fn from(details: CommunityWithProgress) -> Self {
        JoinedCommunityResponse {
            community_id: details.community.id,
            title: details.community.title,
            image: details.community.image,
            is_creator: details.is_creator,
            fill_percent: details.fill_percent,
            success_percent: details.success_percent,
            start_date: details.community.start_date,
            end_date: details.community.end_date,
            date_status: details.date_status,
        }
    }
}

/// A member with the clear count backing the level figures
#[derive(Debug)]
pub struct MemberWithStats {
    pub member: Member,
    pub total_clear: i64,
}

impl From<MemberWithStats> for UserInfoResponse {
    fn from(details: MemberWithStats) -> Self {
        let needed = progress::needed_exp_for_level(details.member.level);
        UserInfoResponse {
            id: details.member.id,
            nickname: details.member.nickname,
            username: details.member.username,
            profile_image: details.member.profile_image,
            level: details.member.level,
            total_clear: details.total_clear,
            current_exp: details.member.exp,
            needed_exp_for_next_level: needed,
            is_secret: details.member.is_secret,
            login_type: details.member.login_provider.as_str().to_string(),
        }
    }
}

impl From<ClearMission> for ClearMissionResponse {
    fn from(clear: ClearMission) -> Self {
        ClearMissionResponse {
            id: clear.id,
            mission_name: clear.mission_name,
            cleared_on: clear.cleared_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mission_core::{LoginProvider, Snowflake};

    #[test]
    fn test_user_info_uses_exp_table() {
        let mut member = Member::new(
            Snowflake::new(1),
            "turtle".to_string(),
            "Kim Turtle".to_string(),
            LoginProvider::Naver,
        );
        member.level = 3;
        member.exp = 7;

        let info = UserInfoResponse::from(MemberWithStats {
            member,
            total_clear: 12,
        });

        assert_eq!(info.level, 3);
        assert_eq!(info.current_exp, 7);
        assert_eq!(info.needed_exp_for_next_level, progress::needed_exp_for_level(3));
        assert_eq!(info.total_clear, 12);
        assert_eq!(info.login_type, "naver");
    }

    #[test]
    fn test_proof_response_assembly() {
        let proof = Proof::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            "turtle".to_string(),
            "day 1".to_string(),
            "done".to_string(),
        );
        let images = vec![ProofImage::new(
            Snowflake::new(2),
            Snowflake::new(1),
            "/uploads/a.jpg".to_string(),
            "a.jpg".to_string(),
            0,
        )];

        let response = ProofResponse::from(ProofWithDetails {
            proof,
            images,
            comment_count: 2,
            heart_count: 5,
            is_writer: true,
            has_liked: false,
        });

        assert_eq!(response.proof_id, Snowflake::new(1));
        assert_eq!(response.images.len(), 1);
        assert_eq!(response.comment_count, 2);
        assert!(response.is_writer);
        assert!(!response.has_liked);
    }
}
