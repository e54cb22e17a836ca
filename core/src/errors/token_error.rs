//! Token issuance and verification error types
//!
//! Every failure mode carries a distinct variant with a stable error code so
//! callers can react programmatically. Verification failures are never
//! collapsed into a single generic error.

use thiserror::Error;

/// Errors produced while assembling claims, issuing tokens, or verifying them
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Missing or empty required field: {field}")]
    InvalidInput { field: String },

    #[error("Token TTL must be positive, got {minutes} minutes")]
    InvalidTtl { minutes: i64 },

    #[error("Token signing failed: {reason}")]
    Signing { reason: String },

    #[error("Token has expired")]
    Expired,

    #[error("Token is not yet valid")]
    NotYetValid,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token audience does not match the expected audience")]
    AudienceMismatch,

    #[error("Token issuer does not match the expected issuer")]
    IssuerMismatch,

    #[error("Invalid token format")]
    InvalidFormat,

    #[error("Failed to look up {resource}")]
    ProviderFailure { resource: String },
}

impl TokenError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::InvalidInput { .. } => "INVALID_INPUT",
            TokenError::InvalidTtl { .. } => "INVALID_TTL",
            TokenError::Signing { .. } => "SIGNING_FAILED",
            TokenError::Expired => "TOKEN_EXPIRED",
            TokenError::NotYetValid => "TOKEN_NOT_YET_VALID",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::AudienceMismatch => "AUDIENCE_MISMATCH",
            TokenError::IssuerMismatch => "ISSUER_MISMATCH",
            TokenError::InvalidFormat => "INVALID_TOKEN_FORMAT",
            TokenError::ProviderFailure { .. } => "PROVIDER_FAILURE",
        }
    }

    /// Whether this error was caused by bad caller input (4xx semantics)
    pub fn is_caller_error(&self) -> bool {
        matches!(self, TokenError::InvalidInput { .. })
    }

    /// Whether this error was raised while verifying a presented token
    /// (401 semantics for the verifying caller)
    pub fn is_verification_error(&self) -> bool {
        matches!(
            self,
            TokenError::Expired
                | TokenError::NotYetValid
                | TokenError::InvalidSignature
                | TokenError::AudienceMismatch
                | TokenError::IssuerMismatch
                | TokenError::InvalidFormat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            TokenError::InvalidInput {
                field: "sub".to_string(),
            },
            TokenError::InvalidTtl { minutes: 0 },
            TokenError::Signing {
                reason: "bad key".to_string(),
            },
            TokenError::Expired,
            TokenError::NotYetValid,
            TokenError::InvalidSignature,
            TokenError::AudienceMismatch,
            TokenError::IssuerMismatch,
            TokenError::InvalidFormat,
            TokenError::ProviderFailure {
                resource: "identity".to_string(),
            },
        ];

        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_error_messages() {
        let error = TokenError::InvalidInput {
            field: "application.id".to_string(),
        };
        assert!(error.to_string().contains("application.id"));

        let error = TokenError::InvalidTtl { minutes: -5 };
        assert!(error.to_string().contains("-5"));
    }

    #[test]
    fn test_error_classification() {
        assert!(TokenError::InvalidInput {
            field: "sub".to_string()
        }
        .is_caller_error());
        assert!(!TokenError::Expired.is_caller_error());

        assert!(TokenError::Expired.is_verification_error());
        assert!(TokenError::InvalidSignature.is_verification_error());
        assert!(!TokenError::InvalidTtl { minutes: 0 }.is_verification_error());
    }
}
