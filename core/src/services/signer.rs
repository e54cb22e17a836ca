//! RS256 signing and verification wrappers around `jsonwebtoken`.
//!
//! The signer produces compact JWTs (`{"alg": "RS256", "typ": "JWT"}`
//! header, base64url-encoded segments); the verifier checks the signature,
//! `exp`, `nbf`, and optionally `iss`/`aud`, reporting each failure as a
//! distinct `TokenError` variant.

use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::domain::entities::claims::Claims;
use crate::domain::entities::signing_key::SigningKey;
use crate::errors::TokenError;

/// Signs claim payloads with an RSA private key using RS256
pub struct Rs256Signer {
    encoding_key: EncodingKey,
    header: Header,
}

impl Rs256Signer {
    /// Creates a signer from validated key material
    pub fn new(key: &SigningKey) -> Result<Self, TokenError> {
        Ok(Self {
            encoding_key: key.encoding_key()?,
            header: Header::new(Algorithm::RS256),
        })
    }

    /// Encodes and signs the claims into a compact token string
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&self.header, claims, &self.encoding_key).map_err(|e| TokenError::Signing {
            reason: e.to_string(),
        })
    }
}

/// Verifies RS256 tokens against an RSA public key
///
/// Checks performed: signature validity, `exp` not passed, `nbf` not in the
/// future (both with zero leeway), and `iss`/`aud` when expectations are
/// configured via the builder methods.
pub struct Rs256Verifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Rs256Verifier {
    /// Creates a verifier from a PEM-encoded RSA public key
    pub fn from_rsa_pem(pem: &[u8]) -> Result<Self, TokenError> {
        let decoding_key = DecodingKey::from_rsa_pem(pem).map_err(|e| TokenError::Signing {
            reason: format!("invalid RSA public key: {}", e),
        })?;

        let mut validation = Validation::new(Algorithm::RS256);
        // Exact expiry semantics: a token is expired the second after `exp`.
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // Audience is only checked when an expectation is configured via
        // `expect_audience`; the jsonwebtoken default would otherwise reject
        // any token carrying an `aud` claim.
        validation.validate_aud = false;

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    /// Require the `iss` claim to match
    pub fn expect_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self
    }

    /// Require the `aud` claim to match
    pub fn expect_audience(mut self, audience: &str) -> Self {
        self.validation.set_audience(&[audience]);
        self.validation.validate_aud = true;
        self
    }

    /// Verifies a compact token and returns its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::ImmatureSignature => TokenError::NotYetValid,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::InvalidAudience => TokenError::AudienceMismatch,
                jsonwebtoken::errors::ErrorKind::InvalidIssuer => TokenError::IssuerMismatch,
                _ => TokenError::InvalidFormat,
            }
        })?;

        Ok(data.claims)
    }
}
