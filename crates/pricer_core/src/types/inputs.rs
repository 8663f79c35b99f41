//! Model inputs and output records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{InvalidDomainError, Parameter};

/// The five Black-Scholes model inputs.
///
/// Rate is continuously compounded and may take any sign. Expiry is in
/// years and volatility is annualised.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingInputs;
///
/// let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// assert!(inputs.validate().is_ok());
///
/// let expired = PricingInputs { expiry: 0.0, ..inputs };
/// assert!(expired.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingInputs {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to expiry in years (T)
    pub expiry: f64,
    /// Risk-free interest rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
}

impl PricingInputs {
    /// Creates a new set of inputs without validating them.
    #[inline]
    pub fn new(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        }
    }

    /// Checks that the inputs lie inside the model's domain.
    ///
    /// Fields are checked in the order spot, strike, expiry, rate,
    /// volatility and the first violation is reported.
    ///
    /// # Errors
    /// - `InvalidDomainError::NonFinite` if any field is NaN or infinite
    /// - `InvalidDomainError::NonPositive` if S, K, T or σ is `<= 0`
    pub fn validate(&self) -> Result<(), InvalidDomainError> {
        for (parameter, value) in self.fields() {
            if !value.is_finite() {
                return Err(InvalidDomainError::NonFinite { parameter, value });
            }
            if parameter != Parameter::Rate && value <= 0.0 {
                return Err(InvalidDomainError::NonPositive { parameter, value });
            }
        }
        Ok(())
    }

    fn fields(&self) -> [(Parameter, f64); 5] {
        [
            (Parameter::Spot, self.spot),
            (Parameter::Strike, self.strike),
            (Parameter::Expiry, self.expiry),
            (Parameter::Rate, self.rate),
            (Parameter::Volatility, self.volatility),
        ]
    }
}

/// First-order sensitivities of a European call.
///
/// Theta is expressed per year. All five values are always produced
/// together.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂t, per year
    pub theta: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Price and Greeks computed from one shared set of d₁/d₂ terms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CallValuation {
    /// Theoretical call value
    pub price: f64,
    /// Sensitivities at the same inputs
    pub greeks: Greeks,
}
