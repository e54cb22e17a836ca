//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and log filter defaults
//! - `issuer` - Token issuance parameters (issuer, audience, TTL)
//! - `server` - HTTP server configuration

pub mod environment;
pub mod issuer;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use environment::Environment;
pub use issuer::IssuerConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Token issuance configuration
    pub issuer: IssuerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            issuer: IssuerConfig::from_env(),
        }
    }
}
