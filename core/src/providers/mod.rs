//! Provider traits for the service's external collaborators.
//!
//! Token issuance needs two lookups the core deliberately does not own: who
//! the authenticated user is, and which application the token is being
//! minted for. Both are expressed as traits so deployments can plug in their
//! session store and application registry.

pub mod application_directory;
pub mod identity_provider;

pub use application_directory::{ApplicationDirectory, StaticApplicationDirectory};
pub use identity_provider::{IdentityProvider, StaticIdentityProvider};
