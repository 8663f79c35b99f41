//! Analytical pricing formulas for European call options.
//!
//! This module provides:
//! - Black-Scholes call price for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Theta, Vega, Rho)
//! - Standard normal CDF/PDF
//!
//! ## Design Principles
//!
//! - **One d₁/d₂ evaluation per request**: [`BlackScholesCall`] caches the
//!   intermediate terms so price and Greeks are computed consistently
//! - **Numerical Stability**: erfc-based CDF keeps precision in both tails
//! - **Explicit domain handling**: see [`DomainPolicy`]

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::{greeks, price, value, BlackScholesCall, DomainPolicy};
pub use distributions::{norm_cdf, norm_pdf};
