//! Typed REST wrappers for the judge platform API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token attached from the persisted session slot. Server-side (SSR): inert
//! stubs, since the API is only reachable from the browser.
//!
//! Wrappers are split by domain (`user`, `problems`, `submissions`, `forum`,
//! `news`) so pages depend on small focused surfaces; each one is a
//! pass-through that marshals JSON and nothing else.

pub mod error;
pub mod forum;
pub mod news;
pub mod problems;
pub mod submissions;
pub mod types;
pub mod user;

/// All endpoints hang off the versioned API root.
pub const API_BASE: &str = "/api/v1";

/// `Authorization` header value for the current visitor, if logged in.
///
/// Reads the persisted token slot directly so request building does not need
/// access to the reactive session context.
#[cfg(feature = "hydrate")]
fn authorization() -> Option<String> {
    use crate::state::session::TOKEN_KEY;
    use crate::util::storage::{BrowserStorage, StorageBackend};

    BrowserStorage
        .get(TOKEN_KEY)
        .map(|token| format!("Bearer {token}"))
}

#[cfg(feature = "hydrate")]
fn request(
    method: gloo_net::http::Method,
    path: &str,
) -> gloo_net::http::RequestBuilder {
    let url = format!("{API_BASE}{path}");
    let mut builder = gloo_net::http::RequestBuilder::new(&url).method(method);
    if let Some(auth) = authorization() {
        builder = builder.header("Authorization", &auth);
    }
    builder
}

/// GET `path` and decode the JSON body as `T`.
#[cfg(feature = "hydrate")]
async fn get_json<T>(path: &str) -> Result<T, error::ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = request(gloo_net::http::Method::GET, path)
        .send()
        .await
        .map_err(|e| error::ApiError::Network(e.to_string()))?;
    decode(resp).await
}

/// POST `body` as JSON to `path` and decode the JSON response as `T`.
#[cfg(feature = "hydrate")]
async fn post_json<B, T>(path: &str, body: &B) -> Result<T, error::ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    send_with_body(gloo_net::http::Method::POST, path, body).await
}

/// PUT `body` as JSON to `path` and decode the JSON response as `T`.
#[cfg(feature = "hydrate")]
async fn put_json<B, T>(path: &str, body: &B) -> Result<T, error::ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    send_with_body(gloo_net::http::Method::PUT, path, body).await
}

#[cfg(feature = "hydrate")]
async fn send_with_body<B, T>(
    method: gloo_net::http::Method,
    path: &str,
    body: &B,
) -> Result<T, error::ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = request(method, path)
        .json(body)
        .map_err(|e| error::ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| error::ApiError::Network(e.to_string()))?;
    decode(resp).await
}

#[cfg(feature = "hydrate")]
async fn decode<T>(resp: gloo_net::http::Response) -> Result<T, error::ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        return Err(error::ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| error::ApiError::Decode(e.to_string()))
}
