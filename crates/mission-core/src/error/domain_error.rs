//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(Snowflake),

    #[error("Community not found: {0}")]
    CommunityNotFound(Snowflake),

    #[error("Proof not found: {0}")]
    ProofNotFound(Snowflake),

    #[error("Image not found: {0}")]
    ImageNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Start date must not be after end date")]
    InvalidDateWindow,

    #[error("Score target must be greater than zero")]
    ZeroScoreTarget,

    #[error("Participant capacity must be greater than zero")]
    ZeroCapacity,

    #[error("Image edit mismatch: {expected} image ids, {got} files")]
    ImageEditMismatch { expected: usize, got: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the author may modify this proof")]
    NotProofAuthor,

    #[error("Only the author may modify this comment")]
    NotCommentAuthor,

    #[error("Only participants may post proofs in this community")]
    NotParticipant,

    #[error("This profile is closed")]
    ClosedProfile,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Nickname already in use: {0}")]
    NicknameTaken(String),

    #[error("Already a participant of this community")]
    AlreadyJoined,

    #[error("Community is full")]
    CommunityFull,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::CommunityNotFound(_) => "UNKNOWN_COMMUNITY",
            Self::ProofNotFound(_) => "UNKNOWN_PROOF",
            Self::ImageNotFound(_) => "UNKNOWN_IMAGE",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDateWindow => "INVALID_DATE_WINDOW",
            Self::ZeroScoreTarget => "ZERO_SCORE_TARGET",
            Self::ZeroCapacity => "ZERO_CAPACITY",
            Self::ImageEditMismatch { .. } => "IMAGE_EDIT_MISMATCH",

            // Authorization
            Self::NotProofAuthor => "NOT_PROOF_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::NotParticipant => "NOT_PARTICIPANT",
            Self::ClosedProfile => "CLOSED_PROFILE",

            // Conflict
            Self::NicknameTaken(_) => "NICKNAME_TAKEN",
            Self::AlreadyJoined => "ALREADY_JOINED",
            Self::CommunityFull => "COMMUNITY_FULL",

            // Infrastructure
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound(_)
                | Self::CommunityNotFound(_)
                | Self::ProofNotFound(_)
                | Self::ImageNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidDateWindow
                | Self::ZeroScoreTarget
                | Self::ZeroCapacity
                | Self::ImageEditMismatch { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotProofAuthor
                | Self::NotCommentAuthor
                | Self::NotParticipant
                | Self::ClosedProfile
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::NicknameTaken(_) | Self::AlreadyJoined | Self::CommunityFull
        )
    }

    /// Check if this is an external I/O error
    pub fn is_external_io(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::MemberNotFound(Snowflake::new(1));
        assert_eq!(err.code(), "UNKNOWN_MEMBER");

        let err = DomainError::NicknameTaken("turtle".to_string());
        assert_eq!(err.code(), "NICKNAME_TAKEN");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ProofNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::CommunityNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::NotParticipant.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotProofAuthor.is_authorization());
        assert!(DomainError::ClosedProfile.is_authorization());
        assert!(!DomainError::CommunityFull.is_authorization());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::AlreadyJoined.is_conflict());
        assert!(DomainError::CommunityFull.is_conflict());
        assert!(!DomainError::ZeroScoreTarget.is_conflict());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::ImageEditMismatch { expected: 2, got: 1 }.is_validation());
        assert!(!DomainError::StorageError("io".to_string()).is_validation());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::ProofNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Proof not found: 123");

        let err = DomainError::ImageEditMismatch { expected: 3, got: 1 };
        assert_eq!(err.to_string(), "Image edit mismatch: 3 image ids, 1 files");
    }
}
