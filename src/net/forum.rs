//! Forum endpoints: posts and their reply threads.

use super::error::ApiError;
use super::types::{ForumPost, ForumPostList, ForumReplyList};

/// Fetch the post list from `GET /forum/posts`.
///
/// # Errors
///
/// Fails on network trouble or a malformed body.
pub async fn fetch_posts() -> Result<ForumPostList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json("/forum/posts").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single post from `GET /forum/posts/{id}`.
///
/// # Errors
///
/// Fails on network trouble, an unknown id, or a malformed body.
pub async fn fetch_post(id: u64) -> Result<ForumPost, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&format!("/forum/posts/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of a post's replies from `GET /forum/posts/{id}/replies`.
///
/// # Errors
///
/// Fails on network trouble, an unknown id, or a malformed body.
pub async fn fetch_replies(id: u64, page: u32, limit: u32) -> Result<ForumReplyList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&format!("/forum/posts/{id}/replies?page={page}&limit={limit}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, page, limit);
        Err(ApiError::Unavailable)
    }
}
