//! Token issuance service.
//!
//! Stamps time claims from a single clock read and delegates RS256 signing
//! to the signer. Issuance is stateless and synchronous: concurrent calls
//! need no coordination because the key material is read-only.

use chrono::Duration;
use tracing::debug;

use crate::domain::entities::claims::{ClaimSet, Claims};
use crate::errors::TokenError;
use crate::services::clock::Clock;
use crate::services::signer::Rs256Signer;

/// A freshly minted token together with its advertised lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Compact RS256 JWT
    pub token: String,

    /// Lifetime in seconds, as reported to clients
    pub expires_in: i64,
}

/// Issues signed, time-bounded tokens
pub struct TokenIssuer<C: Clock> {
    signer: Rs256Signer,
    clock: C,
}

impl<C: Clock> TokenIssuer<C> {
    /// Creates an issuer from a signer and a clock
    pub fn new(signer: Rs256Signer, clock: C) -> Self {
        Self { signer, clock }
    }

    /// Issues a signed token carrying the claim set plus time claims.
    ///
    /// `iat`, `nbf`, and `exp` are derived from one clock read, so the three
    /// fields can never disagree within a single call. The claim set carries
    /// no time fields of its own, which gives the issuer's timestamps
    /// unconditional precedence.
    ///
    /// Fails with `TokenError::InvalidTtl` when `ttl_minutes <= 0` and with
    /// `TokenError::Signing` when the key cannot produce a signature.
    pub fn issue(&self, claims: ClaimSet, ttl_minutes: i64) -> Result<IssuedToken, TokenError> {
        if ttl_minutes <= 0 {
            return Err(TokenError::InvalidTtl {
                minutes: ttl_minutes,
            });
        }

        let now = self.clock.now();
        let expiry = now + Duration::minutes(ttl_minutes);

        let payload = Claims {
            iss: claims.iss,
            aud: claims.aud,
            sub: claims.sub,
            email: claims.email,
            business_external_id: claims.business_external_id,
            application: claims.application,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
        };

        let token = self.signer.sign(&payload)?;
        debug!(sub = %payload.sub, exp = payload.exp, "issued token");

        Ok(IssuedToken {
            token,
            expires_in: ttl_minutes * 60,
        })
    }
}
