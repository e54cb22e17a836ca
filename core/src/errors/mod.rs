//! Error types for the token issuance core

pub mod token_error;

pub use token_error::TokenError;
