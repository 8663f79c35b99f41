//! Black-Scholes pricing kernel for European call options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! **Greeks**:
//! - Delta = N(d₁)
//! - Gamma = φ(d₁) / (S·σ·√T)
//! - Theta = -(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)   (per year)
//! - Vega  = S·φ(d₁)·√T
//! - Rho   = K·T·e^(-rT)·N(d₂)

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::distributions::{norm_cdf, norm_pdf};
use crate::types::{CallValuation, Greeks, InvalidDomainError, PricingInputs};

/// How the kernel treats inputs outside the model's domain.
///
/// # Variants
/// - `Strict`: reject with [`InvalidDomainError`] before any arithmetic
/// - `Legacy`: skip validation; degenerate inputs yield NaN or ±infinity
///   by IEEE-754 rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DomainPolicy {
    /// Reject out-of-domain inputs.
    #[default]
    Strict,
    /// Propagate non-finite results silently.
    Legacy,
}

impl DomainPolicy {
    /// Returns the lowercase name of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainPolicy::Strict => "strict",
            DomainPolicy::Legacy => "legacy",
        }
    }
}

impl std::fmt::Display for DomainPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// d₁/d₂ together with the factors every formula reuses.
///
/// √T is evaluated once so d₁ and d₂ cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IntermediateTerms {
    pub(crate) d1: f64,
    pub(crate) d2: f64,
    pub(crate) sqrt_t: f64,
    pub(crate) discount: f64,
}

/// Computes the standardised distance terms for the given inputs.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T), d₂ = d₁ - σ√T
#[inline]
pub(crate) fn compute_d1_d2(inputs: &PricingInputs) -> IntermediateTerms {
    let PricingInputs {
        spot,
        strike,
        expiry,
        rate,
        volatility,
    } = *inputs;

    let sqrt_t = expiry.sqrt();
    let vol_sqrt_t = volatility * sqrt_t;

    let log_moneyness = (spot / strike).ln();
    let drift = (rate + 0.5 * volatility * volatility) * expiry;

    let d1 = (log_moneyness + drift) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    IntermediateTerms {
        d1,
        d2,
        sqrt_t,
        discount: (-rate * expiry).exp(),
    }
}

/// Black-Scholes kernel for a single European call.
///
/// Construction computes d₁ and d₂ once; [`price`](Self::price),
/// [`greeks`](Self::greeks) and [`valuation`](Self::valuation) all read the
/// same terms, so price and sensitivities always agree for one set of
/// inputs.
///
/// # Examples
/// ```
/// use pricer_core::analytical::BlackScholesCall;
/// use pricer_core::types::PricingInputs;
///
/// let call = BlackScholesCall::new(PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2)).unwrap();
/// let greeks = call.greeks();
///
/// assert!(call.price() > 0.0);
/// assert!(greeks.delta > 0.5 && greeks.delta < 1.0);
///
/// // Degenerate inputs are rejected in strict mode
/// assert!(BlackScholesCall::new(PricingInputs::new(100.0, 100.0, 0.0, 0.05, 0.2)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesCall {
    inputs: PricingInputs,
    terms: IntermediateTerms,
}

impl BlackScholesCall {
    /// Creates a kernel after validating the inputs.
    ///
    /// # Errors
    /// - `InvalidDomainError::NonFinite` if any input is NaN or infinite
    /// - `InvalidDomainError::NonPositive` if S, K, T or σ is `<= 0`
    pub fn new(inputs: PricingInputs) -> Result<Self, InvalidDomainError> {
        Self::with_policy(inputs, DomainPolicy::Strict)
    }

    /// Creates a kernel, validating only under [`DomainPolicy::Strict`].
    ///
    /// # Errors
    /// Same as [`new`](Self::new) when `policy` is `Strict`; never fails
    /// under `Legacy`.
    pub fn with_policy(
        inputs: PricingInputs,
        policy: DomainPolicy,
    ) -> Result<Self, InvalidDomainError> {
        if policy == DomainPolicy::Strict {
            inputs.validate()?;
        }

        Ok(Self {
            inputs,
            terms: compute_d1_d2(&inputs),
        })
    }

    /// Returns the inputs this kernel was built from.
    #[inline]
    pub fn inputs(&self) -> &PricingInputs {
        &self.inputs
    }

    /// Computes the call value.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    #[inline]
    pub fn price(&self) -> f64 {
        let IntermediateTerms { d1, d2, discount, .. } = self.terms;
        self.inputs.spot * norm_cdf(d1) - self.inputs.strike * discount * norm_cdf(d2)
    }

    /// Computes all five sensitivities.
    ///
    /// Theta is per year; divide by 365 for a per-day figure.
    pub fn greeks(&self) -> Greeks {
        let PricingInputs {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        } = self.inputs;
        let IntermediateTerms {
            d1,
            d2,
            sqrt_t,
            discount,
        } = self.terms;

        let n_d1 = norm_cdf(d1);
        let n_d2 = norm_cdf(d2);
        let pdf_d1 = norm_pdf(d1);

        Greeks {
            delta: n_d1,
            gamma: pdf_d1 / (spot * volatility * sqrt_t),
            theta: -spot * pdf_d1 * volatility / (2.0 * sqrt_t)
                - rate * strike * discount * n_d2,
            vega: spot * pdf_d1 * sqrt_t,
            rho: strike * expiry * discount * n_d2,
        }
    }

    /// Computes the price and Greeks together.
    pub fn valuation(&self) -> CallValuation {
        CallValuation {
            price: self.price(),
            greeks: self.greeks(),
        }
    }
}

/// Prices a European call, rejecting out-of-domain inputs.
///
/// # Examples
/// ```
/// use pricer_core::analytical::price;
///
/// let call = price(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!((call - 10.4506).abs() < 1e-3);
/// ```
pub fn price(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
) -> Result<f64, InvalidDomainError> {
    let inputs = PricingInputs::new(spot, strike, expiry, rate, volatility);
    Ok(BlackScholesCall::new(inputs)?.price())
}

/// Computes the call Greeks, rejecting out-of-domain inputs.
pub fn greeks(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
) -> Result<Greeks, InvalidDomainError> {
    let inputs = PricingInputs::new(spot, strike, expiry, rate, volatility);
    Ok(BlackScholesCall::new(inputs)?.greeks())
}

/// Computes price and Greeks from one d₁/d₂ evaluation.
pub fn value(inputs: &PricingInputs) -> Result<CallValuation, InvalidDomainError> {
    Ok(BlackScholesCall::new(*inputs)?.valuation())
}
