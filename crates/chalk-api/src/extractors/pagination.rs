//! Pagination extractor
//!
//! Extracts page-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_PER_PAGE: i64 = 20;
/// Maximum page size
const MAX_PER_PAGE: i64 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageParams {
    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,
    /// Number of items per page
    #[serde(default)]
    pub per_page: Option<i64>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// 1-based page number (at least 1)
    pub page: i64,
    /// Items per page (clamped to 1-100)
    pub per_page: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self {
            page: params.page.unwrap_or(1).max(1),
            per_page: params
                .per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Page::from(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page() {
        let page = Page::default();
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_per_page_clamping() {
        let page = Page::from(PageParams {
            page: Some(2),
            per_page: Some(500),
        });
        assert_eq!(page.per_page, MAX_PER_PAGE);

        let page = Page::from(PageParams {
            page: None,
            per_page: Some(0),
        });
        assert_eq!(page.per_page, 1);
    }

    #[test]
    fn test_page_floor() {
        let page = Page::from(PageParams {
            page: Some(-3),
            per_page: None,
        });
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, DEFAULT_PER_PAGE);
    }
}
