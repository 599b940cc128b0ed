//! Pagination extractor
//!
//! Extracts page-number pagination from query strings. Caller-facing page
//! numbers are 1-based; the service layer translates them to 0-based offsets.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_SIZE: i64 = 10;
/// Maximum page size
const MAX_SIZE: i64 = 50;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,
    /// Page size
    #[serde(default)]
    pub size: Option<i64>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// 1-based page number (clamped to >= 1)
    pub page: i64,
    /// Page size (clamped to 1-50)
    pub size: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_SIZE,
        }
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self {
            page: params.page.unwrap_or(1).max(1),
            size: params.size.unwrap_or(DEFAULT_SIZE).clamp(1, MAX_SIZE),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Pagination::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.size, DEFAULT_SIZE);
    }

    #[test]
    fn test_page_clamps_to_one() {
        let pagination = Pagination::from(PaginationParams {
            page: Some(0),
            size: None,
        });
        assert_eq!(pagination.page, 1);

        let pagination = Pagination::from(PaginationParams {
            page: Some(-3),
            size: None,
        });
        assert_eq!(pagination.page, 1);
    }

    #[test]
    fn test_size_clamping() {
        let pagination = Pagination::from(PaginationParams {
            page: Some(2),
            size: Some(500),
        });
        assert_eq!(pagination.size, MAX_SIZE);

        let pagination = Pagination::from(PaginationParams {
            page: Some(2),
            size: Some(0),
        });
        assert_eq!(pagination.size, 1);
    }
}
