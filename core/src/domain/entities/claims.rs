//! Claim entities for RS256 token issuance.
//!
//! `ClaimSet` is the output of claim assembly and carries no time fields;
//! `Claims` is the wire payload after the issuer stamps `iat`/`exp`/`nbf`.
//! Optional claims are modeled as `Option` with `skip_serializing_if`, so a
//! missing value means the key is absent from the encoded payload, never
//! serialized as `null`.

use serde::{Deserialize, Serialize};

/// Identity facts about the authenticated user, as supplied by the session
/// layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Subject identifier (`sub` claim)
    pub user_id: String,

    /// User email address
    pub email: String,

    /// External business identifier, if the user belongs to one
    pub business_external_id: Option<String>,
}

impl Identity {
    /// Creates an identity without a business external id
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            business_external_id: None,
        }
    }

    /// Attach a business external id
    pub fn with_business_external_id(mut self, id: impl Into<String>) -> Self {
        self.business_external_id = Some(id.into());
        self
    }
}

/// Application facts supplied by the application directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationFacts {
    /// External application identifier
    pub application_id: String,

    /// Institution the application belongs to
    pub institution_id: String,

    /// Financial product identifier, if scoped to one
    pub product_id: Option<String>,
}

impl ApplicationFacts {
    /// Creates application facts without a product id
    pub fn new(application_id: impl Into<String>, institution_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            institution_id: institution_id.into(),
            product_id: None,
        }
    }

    /// Attach a product id
    pub fn with_product_id(mut self, id: impl Into<String>) -> Self {
        self.product_id = Some(id.into());
        self
    }
}

/// Nested `application` claim object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationClaims {
    /// External application identifier
    pub id: String,

    /// Institution identifier
    pub institution_id: String,

    /// Product identifier, omitted from the payload when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

/// Assembled claim set, not yet time-stamped
///
/// Required claims are plain fields and therefore always present; the two
/// optional claims are omitted from the serialized payload when `None`.
/// Timestamps are deliberately not representable here: they are stamped by
/// the token issuer from a single clock read, so callers cannot smuggle in
/// their own `iat`/`exp`/`nbf` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Subject (user id)
    pub sub: String,

    /// User email
    pub email: String,

    /// External business identifier, omitted when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_external_id: Option<String>,

    /// Nested application claims
    pub application: ApplicationClaims,
}

/// Wire payload: the claim set plus issuer-stamped time fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Subject (user id)
    pub sub: String,

    /// User email
    pub email: String,

    /// External business identifier, omitted when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_external_id: Option<String>,

    /// Nested application claims
    pub application: ApplicationClaims,

    /// Issued at (seconds since epoch)
    pub iat: i64,

    /// Expiration (seconds since epoch)
    pub exp: i64,

    /// Not before (seconds since epoch)
    pub nbf: i64,
}

impl Claims {
    /// Returns the claim set carried by this payload, dropping the time
    /// fields
    pub fn claim_set(&self) -> ClaimSet {
        ClaimSet {
            iss: self.iss.clone(),
            aud: self.aud.clone(),
            sub: self.sub.clone(),
            email: self.email.clone(),
            business_external_id: self.business_external_id.clone(),
            application: self.application.clone(),
        }
    }
}
