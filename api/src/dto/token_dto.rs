//! Request/response bodies for the token endpoint

use serde::{Deserialize, Serialize};

/// Successful issuance response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Compact RS256 JWT
    pub token: String,

    /// Always "Bearer"
    pub token_type: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl TokenResponse {
    /// Wraps an issued token as a Bearer credential
    pub fn bearer(token: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: String::from("Bearer"),
            expires_in,
        }
    }
}

/// Error response body: stable code plus human-readable detail.
///
/// The detail never carries key material or stack traces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code for programmatic handling
    pub error: String,

    /// Human-readable message
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: detail.into(),
        }
    }
}
