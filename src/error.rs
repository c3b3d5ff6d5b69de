// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.
//!
//! Every request follows the same taxonomy: transport failure, non-success
//! HTTP status, or a body that fails to decode. All three are terminal for
//! the operation that triggered them; nothing is retried automatically.

/// Error type for all client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server rejected the request with 401.
    ///
    /// Distinguished from other statuses because a 401 on token verification
    /// evicts the persisted token.
    #[error("Invalid or expired token")]
    Unauthorized,

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response body: {0}")]
    Malformed(String),

    /// Token file read/write failure.
    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// True for errors carrying a definitive server verdict (an HTTP status),
    /// as opposed to transport or decode failures where no verdict exists.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Unauthorized | ClientError::Api { .. })
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
