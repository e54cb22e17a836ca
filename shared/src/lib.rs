//! # TokenService Shared
//!
//! Configuration types shared across the token issuance service crates.

pub mod config;

pub use config::{AppConfig, Environment, IssuerConfig, ServerConfig};
