//! Maps core errors to HTTP responses.
//!
//! Caller errors map to 400, verification failures to 401, and everything
//! else (bad key, bad TTL, provider outage) to 500. Response bodies carry a
//! stable code and message only; key material never reaches the wire.

use actix_web::HttpResponse;
use tracing::{error, warn};

use ts_core::errors::TokenError;

use crate::dto::ErrorResponse;

pub fn handle_token_error(err: TokenError) -> HttpResponse {
    let body = ErrorResponse::new(err.error_code(), err.to_string());

    if err.is_caller_error() {
        warn!(code = err.error_code(), "rejected token request: {}", err);
        HttpResponse::BadRequest().json(body)
    } else if err.is_verification_error() {
        warn!(code = err.error_code(), "token verification failed: {}", err);
        HttpResponse::Unauthorized().json(body)
    } else {
        error!(code = err.error_code(), "token issuance failed: {}", err);
        HttpResponse::InternalServerError().json(body)
    }
}
