//! # TokenService API
//!
//! HTTP surface for the token issuance service: a single issuance endpoint
//! plus health and service-descriptor routes, wired over the core services
//! through dependency injection.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
