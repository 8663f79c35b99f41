//! Value types shared by the pricing kernel and its consumers.
//!
//! This module provides:
//! - [`PricingInputs`]: the five Black-Scholes model inputs
//! - [`Greeks`] and [`CallValuation`]: the kernel's output records
//! - [`InvalidDomainError`]: structured rejection of out-of-domain inputs

pub mod error;
pub mod inputs;

pub use error::{InvalidDomainError, Parameter};
pub use inputs::{CallValuation, Greeks, PricingInputs};
