//! HTTP service for the Black-Scholes call kernel
//!
//! Exposes `pricer_core` over a small JSON API: `POST /black-scholes`
//! returns the price and Greeks of a European call, and `/health` and
//! `/ready` serve orchestrator probes.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

// Re-export the kernel for integration tests and embedders
pub use pricer_core;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
