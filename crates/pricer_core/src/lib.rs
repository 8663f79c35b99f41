//! # Pricer Core (P: The Kernel)
//!
//! Closed-form Black-Scholes valuation of a European call option together
//! with its analytical first-order sensitivities.
//!
//! This crate provides:
//! - Value types for the five model inputs and the composite result
//! - Standard normal distribution functions (Φ, φ)
//! - The Black-Scholes call kernel (price, delta, gamma, theta, vega, rho)
//! - Structured domain errors for inputs outside the model's support
//!
//! ## Design Principles
//!
//! - **Pure and stateless**: every call is a deterministic function of its
//!   inputs, safe to invoke from any number of threads
//! - **Shared intermediate terms**: d₁ and d₂ are computed once per kernel
//!   instance and reused by the price and every Greek
//! - **Fail fast**: strict mode rejects degenerate inputs instead of
//!   propagating NaN; legacy mode is available for parity with existing
//!   consumers
//!
//! ## Example
//!
//! ```
//! use pricer_core::analytical::BlackScholesCall;
//! use pricer_core::types::PricingInputs;
//!
//! let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let call = BlackScholesCall::new(inputs).unwrap();
//!
//! let valuation = call.valuation();
//! assert!((valuation.price - 10.4506).abs() < 1e-3);
//! assert!((valuation.greeks.delta - 0.6368).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod types;

pub use analytical::{greeks, price, value, BlackScholesCall, DomainPolicy};
pub use types::{CallValuation, Greeks, InvalidDomainError, Parameter, PricingInputs};
