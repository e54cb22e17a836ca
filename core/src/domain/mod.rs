//! Domain layer: entities carried through token issuance

pub mod entities;

pub use entities::*;
