//! Identity lookup contract.

use async_trait::async_trait;

use crate::domain::entities::claims::Identity;
use crate::errors::TokenError;

/// Resolves the identity of the authenticated caller.
///
/// Real implementations read the session or authorization context; failures
/// surface as `TokenError::ProviderFailure`.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_identity(&self) -> Result<Identity, TokenError>;
}

/// Identity provider returning a fixed record.
///
/// Stands in for a real session lookup in demos and tests.
#[derive(Debug, Clone)]
pub struct StaticIdentityProvider {
    identity: Identity,
}

impl StaticIdentityProvider {
    /// Creates a provider that always returns the given identity
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    /// Sample identity used by the demo wiring
    pub fn demo() -> Self {
        Self::new(
            Identity::new("user_12345", "user@example.com")
                .with_business_external_id("biz_6789"),
        )
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_identity(&self) -> Result<Identity, TokenError> {
        Ok(self.identity.clone())
    }
}
