//! Business services for claim assembly and token issuance

pub mod claim_builder;
pub mod clock;
pub mod signer;
pub mod token_issuer;

pub use claim_builder::ClaimBuilder;
pub use clock::{Clock, FixedClock, SystemClock};
pub use signer::{Rs256Signer, Rs256Verifier};
pub use token_issuer::{IssuedToken, TokenIssuer};
