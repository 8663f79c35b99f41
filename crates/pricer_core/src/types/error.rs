//! Error types for the pricing kernel.
//!
//! This module provides:
//! - `InvalidDomainError`: inputs for which the Black-Scholes formulas are
//!   undefined
//! - `Parameter`: identifies which of the five inputs was rejected

use std::fmt;
use thiserror::Error;

/// One of the five Black-Scholes model inputs.
///
/// The display form is the wire field name used by the request contract,
/// so error messages can be surfaced to callers unchanged.
///
/// # Examples
/// ```
/// use pricer_core::types::Parameter;
///
/// assert_eq!(Parameter::Spot.to_string(), "spotPrice");
/// assert_eq!(Parameter::Volatility.to_string(), "volatility");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Spot price (S)
    Spot,
    /// Strike price (K)
    Strike,
    /// Time to expiry in years (T)
    Expiry,
    /// Continuously compounded risk-free rate (r)
    Rate,
    /// Annualised volatility (σ)
    Volatility,
}

impl Parameter {
    /// Returns the wire field name of this parameter.
    pub fn field_name(&self) -> &'static str {
        match self {
            Parameter::Spot => "spotPrice",
            Parameter::Strike => "strikePrice",
            Parameter::Expiry => "timeToExpiry",
            Parameter::Rate => "riskFreeRate",
            Parameter::Volatility => "volatility",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Inputs outside the domain of the Black-Scholes formulas.
///
/// Raised when any input is non-finite, or when any of S, K, T, σ is not
/// strictly positive. The kernel never returns a partially computed result:
/// either the full valuation is produced or this error is.
///
/// # Variants
/// - `NonFinite`: NaN or ±infinity in any field
/// - `NonPositive`: zero or negative spot, strike, expiry or volatility
///
/// # Examples
/// ```
/// use pricer_core::types::{InvalidDomainError, Parameter};
///
/// let err = InvalidDomainError::NonPositive {
///     parameter: Parameter::Expiry,
///     value: 0.0,
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid domain: timeToExpiry must be strictly positive, got 0"
/// );
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InvalidDomainError {
    /// Input is NaN or infinite.
    #[error("Invalid domain: {parameter} must be finite, got {value}")]
    NonFinite {
        /// The rejected input
        parameter: Parameter,
        /// The offending value
        value: f64,
    },

    /// Input must be strictly positive.
    #[error("Invalid domain: {parameter} must be strictly positive, got {value}")]
    NonPositive {
        /// The rejected input
        parameter: Parameter,
        /// The offending value
        value: f64,
    },
}

impl InvalidDomainError {
    /// Returns the input that caused the rejection.
    pub fn parameter(&self) -> Parameter {
        match self {
            InvalidDomainError::NonFinite { parameter, .. }
            | InvalidDomainError::NonPositive { parameter, .. } => *parameter,
        }
    }

    /// Returns the rejected value.
    pub fn value(&self) -> f64 {
        match self {
            InvalidDomainError::NonFinite { value, .. }
            | InvalidDomainError::NonPositive { value, .. } => *value,
        }
    }
}
