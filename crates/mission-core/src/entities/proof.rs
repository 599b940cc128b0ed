//! Proof entity - a post evidencing completion of a community mission
//!
//! A proof exclusively owns its images, comments, and hearts; deleting the
//! proof cascades to all three.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Proof entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub id: Snowflake,
    pub community_id: Snowflake,
    /// Author is immutable after creation
    pub author_id: Snowflake,
    /// Nickname cached at posting time
    pub author_nickname: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Proof {
    /// Create a new Proof
    pub fn new(
        id: Snowflake,
        community_id: Snowflake,
        author_id: Snowflake,
        author_nickname: String,
        title: String,
        content: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            community_id,
            author_id,
            author_nickname,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a member authored this proof
    #[inline]
    pub fn is_author(&self, member_id: Snowflake) -> bool {
        self.author_id == member_id
    }

    /// Rewrite title and content
    pub fn edit(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
    }
}

/// Image attached to a proof. Position is stable across edits: an edit swaps
/// URL and file name in place, preserving identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofImage {
    pub id: Snowflake,
    pub proof_id: Snowflake,
    pub url: String,
    pub file_name: String,
    pub position: i32,
}

impl ProofImage {
    /// Create a new ProofImage at the given slot
    pub fn new(id: Snowflake, proof_id: Snowflake, url: String, file_name: String, position: i32) -> Self {
        Self {
            id,
            proof_id,
            url,
            file_name,
            position,
        }
    }

    /// Swap the stored file in place, keeping id and position
    pub fn replace_file(&mut self, url: String, file_name: String) {
        self.url = url;
        self.file_name = file_name;
    }
}

/// Comment on a proof
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub proof_id: Snowflake,
    pub author_id: Snowflake,
    pub author_nickname: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new Comment
    pub fn new(
        id: Snowflake,
        proof_id: Snowflake,
        author_id: Snowflake,
        author_nickname: String,
        content: String,
    ) -> Self {
        Self {
            id,
            proof_id,
            author_id,
            author_nickname,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check if a member authored this comment
    #[inline]
    pub fn is_author(&self, member_id: Snowflake) -> bool {
        self.author_id == member_id
    }
}

/// Heart - a like relation between a member and a proof.
///
/// At most one heart exists per (proof, member) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heart {
    pub proof_id: Snowflake,
    pub member_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Heart {
    /// Create a new Heart
    pub fn new(proof_id: Snowflake, member_id: Snowflake) -> Self {
        Self {
            proof_id,
            member_id,
            created_at: Utc::now(),
        }
    }
}

/// Aggregated comment/heart counts for a proof
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofCounts {
    pub proof_id: Snowflake,
    pub comment_count: i64,
    pub heart_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_proof() -> Proof {
        Proof::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            "turtle".to_string(),
            "day 3".to_string(),
            "ran 5km this morning".to_string(),
        )
    }

    #[test]
    fn test_proof_authorship() {
        let proof = test_proof();
        assert!(proof.is_author(Snowflake::new(100)));
        assert!(!proof.is_author(Snowflake::new(200)));
    }

    #[test]
    fn test_proof_edit() {
        let mut proof = test_proof();
        proof.edit("day 3 (edited)".to_string(), "actually 6km".to_string());
        assert_eq!(proof.title, "day 3 (edited)");
        assert_eq!(proof.content, "actually 6km");
        // Author never changes
        assert_eq!(proof.author_id, Snowflake::new(100));
    }

    #[test]
    fn test_image_replace_keeps_identity() {
        let mut image = ProofImage::new(
            Snowflake::new(5),
            Snowflake::new(1),
            "/uploads/a.jpg".to_string(),
            "a.jpg".to_string(),
            0,
        );
        image.replace_file("/uploads/b.jpg".to_string(), "b.jpg".to_string());
        assert_eq!(image.id, Snowflake::new(5));
        assert_eq!(image.position, 0);
        assert_eq!(image.url, "/uploads/b.jpg");
    }

    #[test]
    fn test_comment_authorship() {
        let comment = Comment::new(
            Snowflake::new(7),
            Snowflake::new(1),
            Snowflake::new(100),
            "turtle".to_string(),
            "nice pace".to_string(),
        );
        assert!(comment.is_author(Snowflake::new(100)));
        assert!(!comment.is_author(Snowflake::new(1)));
    }
}
