//! # TokenService Core
//!
//! Core token issuance logic for the token service. This crate contains the
//! domain entities, claim assembly, RS256 signing/verification services,
//! provider interfaces, and error types. It performs no I/O beyond reading
//! key material handed to it at construction time.

pub mod domain;
pub mod errors;
pub mod providers;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use providers::*;
pub use services::*;
