//! HTTP error handling

pub mod error_handler;

pub use error_handler::handle_token_error;
