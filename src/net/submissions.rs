//! Submission endpoints: hand code to the judge and read back verdicts.

use super::error::ApiError;
use super::types::{
    Submission, SubmissionCreateRequest, SubmissionCreateResponse, SubmissionList,
    SubmissionStats,
};

/// Submit code for judging via `POST /submissions`.
///
/// # Errors
///
/// Fails on network trouble, a rejected token, or a malformed body.
pub async fn create_submission(
    req: &SubmissionCreateRequest,
) -> Result<SubmissionCreateResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_json("/submissions", req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one page of the visitor's own submissions from
/// `GET /submissions/user`.
///
/// # Errors
///
/// Fails on network trouble, a rejected token, or a malformed body.
pub async fn fetch_my_submissions(page: u32, limit: u32) -> Result<SubmissionList, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&format!("/submissions/user?page={page}&limit={limit}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, limit);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a single submission with its verdict from `GET /submissions/{id}`.
///
/// # Errors
///
/// Fails on network trouble, an unknown id, or a malformed body.
pub async fn fetch_submission(id: u64) -> Result<Submission, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp: super::types::SubmissionDetailsResponse =
            super::get_json(&format!("/submissions/{id}")).await?;
        Ok(resp.submission)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the visitor's aggregate stats from `GET /submissions/stats`.
///
/// # Errors
///
/// Fails on network trouble, a rejected token, or a malformed body.
pub async fn fetch_stats() -> Result<SubmissionStats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp: super::types::SubmissionStatsResponse =
            super::get_json("/submissions/stats").await?;
        Ok(resp.stats)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
