//! Application metadata lookup contract.

use async_trait::async_trait;

use crate::domain::entities::claims::ApplicationFacts;
use crate::errors::TokenError;

/// Resolves the application the token is being minted for.
///
/// Real implementations query an application registry or database; failures
/// surface as `TokenError::ProviderFailure`.
#[async_trait]
pub trait ApplicationDirectory: Send + Sync {
    async fn application_facts(&self) -> Result<ApplicationFacts, TokenError>;
}

/// Directory returning a fixed application record.
#[derive(Debug, Clone)]
pub struct StaticApplicationDirectory {
    facts: ApplicationFacts,
}

impl StaticApplicationDirectory {
    /// Creates a directory that always returns the given facts
    pub fn new(facts: ApplicationFacts) -> Self {
        Self { facts }
    }

    /// Sample application used by the demo wiring
    pub fn demo() -> Self {
        Self::new(ApplicationFacts::new("ext_app_001", "bank_a").with_product_id("deposit"))
    }
}

#[async_trait]
impl ApplicationDirectory for StaticApplicationDirectory {
    async fn application_facts(&self) -> Result<ApplicationFacts, TokenError> {
        Ok(self.facts.clone())
    }
}
