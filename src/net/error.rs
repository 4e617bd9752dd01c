//! Error type for the API wrapper layer.

use thiserror::Error;

/// Why an API call produced no usable value.
///
/// Pages surface these as inline messages; nothing here is fatal to the
/// client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (offline, DNS, aborted).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Called from the server-side render path, where the API is unreachable.
    #[error("not available on the server")]
    Unavailable,
}
