use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ts_core::domain::entities::signing_key::SigningKey;
use ts_core::providers::{StaticApplicationDirectory, StaticIdentityProvider};
use ts_core::services::claim_builder::ClaimBuilder;
use ts_core::services::clock::SystemClock;
use ts_core::services::signer::Rs256Signer;
use ts_core::services::token_issuer::TokenIssuer;
use ts_shared::config::AppConfig;

use ts_api::app::create_app;
use ts_api::routes::token::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration before logging so the environment default applies
    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.environment.default_log_filter())),
        )
        .init();

    info!(environment = %config.environment, "starting token issuance service");

    // Key material comes from the environment or a file, never from source
    let signing_key = SigningKey::from_env().context("failed to load signing key")?;
    let signer = Rs256Signer::new(&signing_key).context("failed to initialize signer")?;

    // Demo collaborators standing in for the real session and application
    // lookups. Deployments implement IdentityProvider/ApplicationDirectory
    // against their own stores and wire them here.
    warn!("using static demo identity and application providers");
    let identity_provider = StaticIdentityProvider::demo();
    let application_directory = StaticApplicationDirectory::demo();

    let app_state = web::Data::new(AppState {
        issuer: TokenIssuer::new(signer, SystemClock),
        claim_builder: ClaimBuilder::new(
            config.issuer.issuer.clone(),
            config.issuer.audience.clone(),
        ),
        ttl_minutes: config.issuer.ttl_minutes,
        identity_provider,
        application_directory,
    });

    let bind_address = config.server.bind_address();
    info!(%bind_address, "server binding");

    let environment = config.environment;
    let mut server = HttpServer::new(move || create_app(app_state.clone(), environment));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
