//! Token issuance configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default token lifetime in minutes
const DEFAULT_TTL_MINUTES: i64 = 60;

/// Token issuance configuration
///
/// Identifies the issuing and receiving parties and bounds the token
/// lifetime. The signing key itself is not part of this struct: key
/// material is loaded separately at startup and never travels through
/// serializable configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IssuerConfig {
    /// `iss` claim identifying this service
    pub issuer: String,

    /// `aud` claim identifying the receiving party
    pub audience: String,

    /// Token time-to-live in minutes
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: i64,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            issuer: String::from("token-service"),
            audience: String::from("token-service-clients"),
            ttl_minutes: DEFAULT_TTL_MINUTES,
        }
    }
}

impl IssuerConfig {
    /// Create a new issuer configuration
    pub fn new(issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
            ttl_minutes: DEFAULT_TTL_MINUTES,
        }
    }

    /// Set the token time-to-live in minutes
    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.ttl_minutes = minutes;
        self
    }

    /// Load from TOKEN_ISSUER / TOKEN_AUDIENCE / TOKEN_TTL_MINUTES
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let issuer = env::var("TOKEN_ISSUER").unwrap_or(defaults.issuer);
        let audience = env::var("TOKEN_AUDIENCE").unwrap_or(defaults.audience);
        let ttl_minutes = env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_MINUTES);

        Self {
            issuer,
            audience,
            ttl_minutes,
        }
    }

    /// Token lifetime expressed in seconds, as reported to clients
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_minutes * 60
    }
}

fn default_ttl_minutes() -> i64 {
    DEFAULT_TTL_MINUTES
}
