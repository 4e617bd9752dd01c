//! Account endpoints: login, registration, profile.

use super::error::ApiError;
use super::types::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UpdateProfileRequest, User,
};

/// Exchange credentials for a `(user, token)` pair via `POST /users/login`.
///
/// # Errors
///
/// Fails on network trouble, rejected credentials (non-2xx), or a malformed
/// body. The caller decides what to do with the pair; this wrapper does not
/// touch the session.
pub async fn login(req: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_json("/users/login", req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /users/register`.
///
/// # Errors
///
/// Fails on network trouble, validation rejection, or a malformed body.
pub async fn register(req: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_json("/users/register", req).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the authenticated account's profile from `GET /users/profile`.
///
/// # Errors
///
/// Fails on network trouble, an expired or missing token, or a malformed
/// body.
pub async fn fetch_profile() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp: super::types::ProfileResponse = super::get_json("/users/profile").await?;
        Ok(resp.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Update profile fields via `PUT /users/profile`, returning the new record.
///
/// # Errors
///
/// Fails on network trouble, an expired or missing token, or a malformed
/// body.
pub async fn update_profile(req: &UpdateProfileRequest) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp: super::types::UpdateProfileResponse = super::put_json("/users/profile", req).await?;
        Ok(resp.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Unavailable)
    }
}
