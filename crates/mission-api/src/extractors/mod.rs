//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, pagination, and
//! multipart uploads.

mod auth;
mod multipart;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthMember, OptionalAuthMember};
pub use multipart::{MultipartPayload, SingleFile};
pub use pagination::{Pagination, PaginationParams};
pub use path::{CommentIdPath, CommunityIdPath, MemberIdPath, ProofIdPath};
pub use validated::ValidatedJson;
