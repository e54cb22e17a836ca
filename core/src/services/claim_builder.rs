//! Claim assembly.
//!
//! Merges identity and application facts into a `ClaimSet` with the issuer
//! and audience configured for this service. Required claims are always
//! present; optional claims are inserted only when the source field carries
//! a non-empty value, so absence is structural rather than a `null`.

use crate::domain::entities::claims::{ApplicationClaims, ApplicationFacts, ClaimSet, Identity};
use crate::errors::TokenError;

/// Builds claim sets for token issuance
///
/// Pure transformation: no side effects, no clock access. Timestamps are
/// stamped later by the token issuer.
#[derive(Debug, Clone)]
pub struct ClaimBuilder {
    issuer: String,
    audience: String,
}

impl ClaimBuilder {
    /// Creates a builder for the given issuing and receiving parties
    pub fn new(issuer: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
        }
    }

    /// Assembles a claim set from identity and application facts.
    ///
    /// Fails with `TokenError::InvalidInput` when the subject id or the
    /// application id is missing or empty.
    pub fn build(
        &self,
        identity: &Identity,
        facts: &ApplicationFacts,
    ) -> Result<ClaimSet, TokenError> {
        if identity.user_id.trim().is_empty() {
            return Err(TokenError::InvalidInput {
                field: "sub".to_string(),
            });
        }
        if facts.application_id.trim().is_empty() {
            return Err(TokenError::InvalidInput {
                field: "application.id".to_string(),
            });
        }

        Ok(ClaimSet {
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            sub: identity.user_id.clone(),
            email: identity.email.clone(),
            business_external_id: non_empty(identity.business_external_id.as_deref()),
            application: ApplicationClaims {
                id: facts.application_id.clone(),
                institution_id: facts.institution_id.clone(),
                product_id: non_empty(facts.product_id.as_deref()),
            },
        })
    }
}

/// Empty strings count as absent, matching the optional-claim contract
fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ClaimBuilder {
        ClaimBuilder::new("test-issuer", "test-aud")
    }

    fn identity() -> Identity {
        Identity::new("user_12345", "user@example.com")
    }

    fn facts() -> ApplicationFacts {
        ApplicationFacts::new("ext_app_001", "bank_a")
    }

    #[test]
    fn test_required_claims_always_set() {
        let set = builder().build(&identity(), &facts()).unwrap();

        assert_eq!(set.iss, "test-issuer");
        assert_eq!(set.aud, "test-aud");
        assert_eq!(set.sub, "user_12345");
        assert_eq!(set.email, "user@example.com");
        assert_eq!(set.application.id, "ext_app_001");
        assert_eq!(set.application.institution_id, "bank_a");
    }

    #[test]
    fn test_optional_claims_omitted_without_source_data() {
        let set = builder().build(&identity(), &facts()).unwrap();

        assert!(set.business_external_id.is_none());
        assert!(set.application.product_id.is_none());
    }

    #[test]
    fn test_optional_claims_included_when_present() {
        let identity = identity().with_business_external_id("biz_6789");
        let facts = facts().with_product_id("deposit");

        let set = builder().build(&identity, &facts).unwrap();

        assert_eq!(set.business_external_id.as_deref(), Some("biz_6789"));
        assert_eq!(set.application.product_id.as_deref(), Some("deposit"));
    }

    #[test]
    fn test_empty_optional_fields_treated_as_absent() {
        let identity = identity().with_business_external_id("");
        let facts = facts().with_product_id("   ");

        let set = builder().build(&identity, &facts).unwrap();

        assert!(set.business_external_id.is_none());
        assert!(set.application.product_id.is_none());
    }

    #[test]
    fn test_empty_subject_rejected() {
        let mut identity = identity();
        identity.user_id = String::new();

        let result = builder().build(&identity, &facts());
        assert!(matches!(
            result,
            Err(TokenError::InvalidInput { ref field }) if field == "sub"
        ));
    }

    #[test]
    fn test_empty_application_id_rejected() {
        let mut facts = facts();
        facts.application_id = "  ".to_string();

        let result = builder().build(&identity(), &facts);
        assert!(matches!(
            result,
            Err(TokenError::InvalidInput { ref field }) if field == "application.id"
        ));
    }

    #[test]
    fn test_build_is_pure() {
        let b = builder();
        let first = b.build(&identity(), &facts()).unwrap();
        let second = b.build(&identity(), &facts()).unwrap();
        assert_eq!(first, second);
    }
}
