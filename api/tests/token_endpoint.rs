//! HTTP-level tests for the token issuance surface.

use actix_web::{test, web};
use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

use ts_api::app::create_app;
use ts_api::routes::token::AppState;
use ts_core::domain::entities::claims::{ApplicationFacts, Identity};
use ts_core::domain::entities::signing_key::SigningKey;
use ts_core::errors::TokenError;
use ts_core::providers::{
    ApplicationDirectory, IdentityProvider, StaticApplicationDirectory, StaticIdentityProvider,
};
use ts_core::services::claim_builder::ClaimBuilder;
use ts_core::services::clock::SystemClock;
use ts_core::services::signer::{Rs256Signer, Rs256Verifier};
use ts_core::services::token_issuer::TokenIssuer;
use ts_shared::config::Environment;

const PRIVATE_PEM: &str = include_str!("fixtures/rsa_private.pem");
const PUBLIC_PEM: &str = include_str!("fixtures/rsa_public.pem");

fn app_state<I, A>(identity_provider: I, application_directory: A) -> web::Data<AppState<I, A>>
where
    I: IdentityProvider + 'static,
    A: ApplicationDirectory + 'static,
{
    let key = SigningKey::from_pem(PRIVATE_PEM).unwrap();
    let signer = Rs256Signer::new(&key).unwrap();

    web::Data::new(AppState {
        issuer: TokenIssuer::new(signer, SystemClock),
        claim_builder: ClaimBuilder::new("test-issuer", "test-aud"),
        ttl_minutes: 60,
        identity_provider,
        application_directory,
    })
}

fn demo_state() -> web::Data<AppState<StaticIdentityProvider, StaticApplicationDirectory>> {
    app_state(
        StaticIdentityProvider::demo(),
        StaticApplicationDirectory::demo(),
    )
}

#[actix_web::test]
async fn token_endpoint_returns_verifiable_bearer_token() {
    let app = test::init_service(create_app(demo_state(), Environment::Development)).await;

    let request = test::TestRequest::get().uri("/api/token").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 3600);

    let token = body["token"].as_str().unwrap();
    let claims = Rs256Verifier::from_rsa_pem(PUBLIC_PEM.as_bytes())
        .unwrap()
        .expect_issuer("test-issuer")
        .expect_audience("test-aud")
        .verify(token)
        .unwrap();

    assert_eq!(claims.sub, "user_12345");
    assert_eq!(claims.email, "user@example.com");
    assert_eq!(claims.application.id, "ext_app_001");
    assert_eq!(claims.application.institution_id, "bank_a");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[actix_web::test]
async fn issued_token_verifies_with_plain_jsonwebtoken() {
    let app = test::init_service(create_app(demo_state(), Environment::Development)).await;

    let request = test::TestRequest::get().uri("/api/token").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    let token = body["token"].as_str().unwrap();

    let decoding_key = jsonwebtoken::DecodingKey::from_rsa_pem(PUBLIC_PEM.as_bytes()).unwrap();
    let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::RS256);
    validation.set_audience(&["test-aud"]);

    let data = jsonwebtoken::decode::<serde_json::Value>(token, &decoding_key, &validation)
        .expect("token must verify with an independent decoder");
    assert_eq!(data.claims["iss"], "test-issuer");
}

#[actix_web::test]
async fn optional_claims_absent_without_source_data() {
    let state = app_state(
        StaticIdentityProvider::new(Identity::new("user_12345", "user@example.com")),
        StaticApplicationDirectory::new(ApplicationFacts::new("ext_app_001", "bank_a")),
    );
    let app = test::init_service(create_app(state, Environment::Development)).await;

    let request = test::TestRequest::get().uri("/api/token").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    let token = body["token"].as_str().unwrap();
    let segment = token.split('.').nth(1).unwrap();
    let payload_bytes = URL_SAFE_NO_PAD.decode(segment).unwrap();

    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).unwrap();
    let object = payload.as_object().unwrap();
    assert!(!object.contains_key("business_external_id"));
    assert!(!object["application"]
        .as_object()
        .unwrap()
        .contains_key("product_id"));
}

#[actix_web::test]
async fn empty_subject_is_bad_request() {
    let state = app_state(
        StaticIdentityProvider::new(Identity::new("", "user@example.com")),
        StaticApplicationDirectory::demo(),
    );
    let app = test::init_service(create_app(state, Environment::Development)).await;

    let request = test::TestRequest::get().uri("/api/token").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "INVALID_INPUT");
}

struct FailingIdentityProvider;

#[async_trait]
impl IdentityProvider for FailingIdentityProvider {
    async fn current_identity(&self) -> Result<Identity, TokenError> {
        Err(TokenError::ProviderFailure {
            resource: "identity".to_string(),
        })
    }
}

#[actix_web::test]
async fn provider_failure_is_internal_error() {
    let state = app_state(FailingIdentityProvider, StaticApplicationDirectory::demo());
    let app = test::init_service(create_app(state, Environment::Development)).await;

    let request = test::TestRequest::get().uri("/api/token").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(
        response.status(),
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
    );

    let body: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(body["error"], "PROVIDER_FAILURE");
    // The body must not leak anything beyond the stable code and message
    assert!(body.get("trace").is_none());
}

#[actix_web::test]
async fn health_endpoint_reports_healthy() {
    let app = test::init_service(create_app(demo_state(), Environment::Development)).await;

    let request = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "token-service");
}

#[actix_web::test]
async fn index_lists_endpoints() {
    let app = test::init_service(create_app(demo_state(), Environment::Development)).await;

    let request = test::TestRequest::get().uri("/").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(body["endpoints"]["token"]["path"], "/api/token");
    assert_eq!(body["endpoints"]["health"]["path"], "/health");
}

#[actix_web::test]
async fn unknown_route_is_not_found() {
    let app = test::init_service(create_app(demo_state(), Environment::Development)).await;

    let request = test::TestRequest::get().uri("/api/missing").to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
}
