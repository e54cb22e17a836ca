//! Application factory.
//!
//! Builds the actix-web application with all dependencies injected through
//! `AppState` rather than module-level globals.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpResponse};
use tracing_actix_web::TracingLogger;

use ts_core::providers::{ApplicationDirectory, IdentityProvider};
use ts_shared::config::Environment;

use crate::middleware::cors::create_cors;
use crate::routes::token::{issue_token, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<I, A>(
    app_state: web::Data<AppState<I, A>>,
    environment: Environment,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    I: IdentityProvider + 'static,
    A: ApplicationDirectory + 'static,
{
    let cors = create_cors(environment);

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Token issuance
        .service(web::scope("/api").route("/token", web::get().to(issue_token::<I, A>)))
        // Service descriptor
        .route("/", web::get().to(service_descriptor))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "token-service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Service descriptor listing the available endpoints
async fn service_descriptor() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Token Issuance Service",
        "endpoints": {
            "token": {
                "path": "/api/token",
                "method": "GET",
                "description": "Mint an RS256-signed bearer token",
                "responses": {
                    "200": "Token issued",
                    "400": "Missing required identity or application fields",
                    "500": "Signing failure"
                }
            },
            "health": {
                "path": "/health",
                "method": "GET",
                "description": "Service health check"
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "detail": "The requested resource was not found"
    }))
}
