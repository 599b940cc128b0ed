//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use mission_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with community_id
#[derive(Debug, serde::Deserialize)]
pub struct CommunityIdPath {
    pub community_id: String,
}

impl CommunityIdPath {
    /// Parse community_id as Snowflake
    pub fn community_id(&self) -> Result<Snowflake, ApiError> {
        self.community_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid community_id format"))
    }
}

/// Path parameters with proof_id
#[derive(Debug, serde::Deserialize)]
pub struct ProofIdPath {
    pub proof_id: String,
}

impl ProofIdPath {
    /// Parse proof_id as Snowflake
    pub fn proof_id(&self) -> Result<Snowflake, ApiError> {
        self.proof_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid proof_id format"))
    }
}

/// Path parameters with comment_id
#[derive(Debug, serde::Deserialize)]
pub struct CommentIdPath {
    pub comment_id: String,
}

impl CommentIdPath {
    /// Parse comment_id as Snowflake
    pub fn comment_id(&self) -> Result<Snowflake, ApiError> {
        self.comment_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}

/// Path parameters with member_id
#[derive(Debug, serde::Deserialize)]
pub struct MemberIdPath {
    pub member_id: String,
}

impl MemberIdPath {
    /// Parse member_id as Snowflake
    pub fn member_id(&self) -> Result<Snowflake, ApiError> {
        self.member_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid member_id format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let path = ProofIdPath {
            proof_id: "12345".to_string(),
        };
        assert_eq!(path.proof_id().unwrap(), Snowflake::new(12345));
    }

    #[test]
    fn test_parse_invalid_id() {
        let path = ProofIdPath {
            proof_id: "abc".to_string(),
        };
        assert!(path.proof_id().is_err());
    }
}
