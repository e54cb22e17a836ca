//! Data transfer objects for the HTTP surface

pub mod token_dto;

pub use token_dto::{ErrorResponse, TokenResponse};
