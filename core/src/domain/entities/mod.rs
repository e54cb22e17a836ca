//! Domain entities

pub mod claims;
pub mod signing_key;

pub use claims::{ApplicationClaims, ApplicationFacts, ClaimSet, Claims, Identity};
pub use signing_key::SigningKey;
