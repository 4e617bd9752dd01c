//! Platform news endpoints.

use super::error::ApiError;
use super::types::{News, NewsList};

/// Fetch one page of published news from `GET /news`.
///
/// # Errors
///
/// Fails on network trouble or a malformed body.
pub async fn fetch_news(page: u32, limit: u32) -> Result<NewsList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&format!("/news?page={page}&limit={limit}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single article from `GET /news/{id}`.
///
/// # Errors
///
/// Fails on network trouble, an unknown id, or a malformed body.
pub async fn fetch_news_detail(id: u64) -> Result<News, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp: super::types::NewsDetailResponse = super::get_json(&format!("/news/{id}")).await?;
        Ok(resp.news)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
