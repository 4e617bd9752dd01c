//! Problem catalog endpoints.

use super::error::ApiError;
use super::types::{Problem, ProblemList};

/// Fetch one page of the problem list from `GET /problems`.
///
/// # Errors
///
/// Fails on network trouble, a rejected token, or a malformed body.
pub async fn fetch_problems(page: u32, limit: u32) -> Result<ProblemList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&format!("/problems?page={page}&limit={limit}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single problem statement from `GET /problems/{id}`.
///
/// # Errors
///
/// Fails on network trouble, an unknown id, or a malformed body.
pub async fn fetch_problem(id: u64) -> Result<Problem, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&format!("/problems/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch a problem's test cases from `GET /problems/{id}/testcases`.
///
/// Teacher/admin only on the server side; the payload shape is not part of
/// the client contract, so it stays raw JSON.
///
/// # Errors
///
/// Fails on network trouble, insufficient role, or a malformed body.
pub async fn fetch_testcases(id: u64) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&format!("/problems/{id}/testcases")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
