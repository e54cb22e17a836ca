//! Token issuance endpoint.

use actix_web::{web, HttpResponse};

use ts_core::providers::{ApplicationDirectory, IdentityProvider};
use ts_core::services::claim_builder::ClaimBuilder;
use ts_core::services::clock::SystemClock;
use ts_core::services::token_issuer::TokenIssuer;

use crate::dto::TokenResponse;
use crate::handlers::error_handler::handle_token_error;

/// Application state shared across workers.
///
/// Holds the issuer (signing key wrapped in the RS256 signer), the claim
/// builder, and the injected lookup collaborators. Read-only after startup,
/// so requests run concurrently without coordination.
pub struct AppState<I, A> {
    pub issuer: TokenIssuer<SystemClock>,
    pub claim_builder: ClaimBuilder,
    pub ttl_minutes: i64,
    pub identity_provider: I,
    pub application_directory: A,
}

/// Handler for GET /api/token
///
/// Resolves the caller's identity and application facts, assembles the claim
/// set, and returns a freshly signed Bearer token.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJ...",
///     "token_type": "Bearer",
///     "expires_in": 3600
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: identity or application facts missing required fields
/// - 500 Internal Server Error: signing failure or provider outage
pub async fn issue_token<I, A>(state: web::Data<AppState<I, A>>) -> HttpResponse
where
    I: IdentityProvider + 'static,
    A: ApplicationDirectory + 'static,
{
    let identity = match state.identity_provider.current_identity().await {
        Ok(identity) => identity,
        Err(error) => return handle_token_error(error),
    };

    let facts = match state.application_directory.application_facts().await {
        Ok(facts) => facts,
        Err(error) => return handle_token_error(error),
    };

    let claim_set = match state.claim_builder.build(&identity, &facts) {
        Ok(claim_set) => claim_set,
        Err(error) => return handle_token_error(error),
    };

    match state.issuer.issue(claim_set, state.ttl_minutes) {
        Ok(issued) => {
            HttpResponse::Ok().json(TokenResponse::bearer(issued.token, issued.expires_in))
        }
        Err(error) => handle_token_error(error),
    }
}
