//! Property-based tests for the Black-Scholes call kernel.
//!
//! Checks the structural invariants of the model (bounds, monotonicity,
//! limits and determinism) over randomised inputs.

use approx::assert_relative_eq;
use pricer_core::analytical::{BlackScholesCall, DomainPolicy};
use pricer_core::types::{InvalidDomainError, Parameter, PricingInputs};
use proptest::prelude::*;

fn spot_strategy() -> impl Strategy<Value = f64> {
    1.0..1000.0
}

fn expiry_strategy() -> impl Strategy<Value = f64> {
    0.01..5.0
}

fn rate_strategy() -> impl Strategy<Value = f64> {
    -0.05..0.15
}

fn volatility_strategy() -> impl Strategy<Value = f64> {
    0.01..1.5
}

fn inputs_strategy() -> impl Strategy<Value = PricingInputs> {
    (
        spot_strategy(),
        spot_strategy(),
        expiry_strategy(),
        rate_strategy(),
        volatility_strategy(),
    )
        .prop_map(|(spot, strike, expiry, rate, volatility)| {
            PricingInputs::new(spot, strike, expiry, rate, volatility)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_greeks_bounds(inputs in inputs_strategy()) {
        let greeks = BlackScholesCall::new(inputs).unwrap().greeks();

        prop_assert!((0.0..=1.0).contains(&greeks.delta), "delta = {}", greeks.delta);
        prop_assert!(greeks.gamma >= 0.0, "gamma = {}", greeks.gamma);
        prop_assert!(greeks.vega >= 0.0, "vega = {}", greeks.vega);
    }

    #[test]
    fn test_valuation_is_finite(inputs in inputs_strategy()) {
        let valuation = BlackScholesCall::new(inputs).unwrap().valuation();

        prop_assert!(valuation.price.is_finite());
        prop_assert!(valuation.price >= -1e-9, "price = {}", valuation.price);
        prop_assert!(valuation.price <= inputs.spot + 1e-9);
        for value in [
            valuation.greeks.delta,
            valuation.greeks.gamma,
            valuation.greeks.theta,
            valuation.greeks.vega,
            valuation.greeks.rho,
        ] {
            prop_assert!(value.is_finite());
        }
    }

    #[test]
    fn test_deterministic(inputs in inputs_strategy()) {
        let first = BlackScholesCall::new(inputs).unwrap().valuation();
        let second = BlackScholesCall::new(inputs).unwrap().valuation();

        prop_assert_eq!(first.price.to_bits(), second.price.to_bits());
        prop_assert_eq!(first.greeks.delta.to_bits(), second.greeks.delta.to_bits());
        prop_assert_eq!(first.greeks.gamma.to_bits(), second.greeks.gamma.to_bits());
        prop_assert_eq!(first.greeks.theta.to_bits(), second.greeks.theta.to_bits());
        prop_assert_eq!(first.greeks.vega.to_bits(), second.greeks.vega.to_bits());
        prop_assert_eq!(first.greeks.rho.to_bits(), second.greeks.rho.to_bits());
    }

    #[test]
    fn test_atm_delta_between_half_and_one(
        spot in spot_strategy(),
        expiry in expiry_strategy(),
        rate in 0.001..0.15,
        volatility in 0.05..1.5,
    ) {
        let inputs = PricingInputs::new(spot, spot, expiry, rate, volatility);
        let delta = BlackScholesCall::new(inputs).unwrap().greeks().delta;

        prop_assert!(delta > 0.5 && delta < 1.0, "delta = {}", delta);
    }

    #[test]
    fn test_price_increases_with_volatility(
        spot in 50.0..200.0,
        moneyness in 0.7..1.4,
        expiry in 0.25..5.0,
        rate in rate_strategy(),
        volatility in 0.1..1.0,
    ) {
        let strike = spot / moneyness;
        let low = BlackScholesCall::new(PricingInputs::new(spot, strike, expiry, rate, volatility)).unwrap();
        let high = BlackScholesCall::new(PricingInputs::new(spot, strike, expiry, rate, volatility + 0.05)).unwrap();

        prop_assert!(high.price() > low.price(), "{} <= {}", high.price(), low.price());
        prop_assert!(low.greeks().vega > 0.0);
        prop_assert!(high.greeks().vega > 0.0);
    }

    #[test]
    fn test_vanishing_volatility_converges_to_forward_intrinsic(
        strike in 10.0..500.0,
        premium in 1.05..2.0,
        expiry in expiry_strategy(),
        rate in rate_strategy(),
    ) {
        let discounted_strike = strike * (-rate * expiry).exp();
        let spot = discounted_strike * premium;
        let call = BlackScholesCall::new(PricingInputs::new(spot, strike, expiry, rate, 1e-6)).unwrap();

        let intrinsic = (spot - discounted_strike).max(0.0);
        prop_assert!((call.price() - intrinsic).abs() <= 1e-9 * spot);
    }

    #[test]
    fn test_legacy_matches_strict_on_domain(inputs in inputs_strategy()) {
        let strict = BlackScholesCall::new(inputs).unwrap();
        let legacy = BlackScholesCall::with_policy(inputs, DomainPolicy::Legacy).unwrap();

        prop_assert_eq!(strict.valuation(), legacy.valuation());
    }

    #[test]
    fn test_non_positive_expiry_rejected(
        inputs in inputs_strategy(),
        expiry in -5.0..=0.0,
    ) {
        let err = BlackScholesCall::new(PricingInputs { expiry, ..inputs }).unwrap_err();
        prop_assert_eq!(err.parameter(), Parameter::Expiry);
    }
}

/// End-to-end reference scenario covering the full formula chain.
#[test]
fn test_reference_scenario() {
    let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
    let valuation = pricer_core::value(&inputs).unwrap();

    assert_relative_eq!(valuation.price, 10.4506, epsilon = 1e-3);
    assert_relative_eq!(valuation.greeks.delta, 0.6368, epsilon = 1e-2);
    assert_relative_eq!(valuation.greeks.gamma, 0.0188, epsilon = 1e-2);
    assert_relative_eq!(valuation.greeks.vega, 37.52, epsilon = 1e-2);
    assert_relative_eq!(valuation.greeks.theta, -6.414, epsilon = 1e-2);
    assert_relative_eq!(valuation.greeks.rho, 53.23, epsilon = 1e-2);
}

/// Degenerate inputs fail with a domain error rather than NaN.
#[test]
fn test_degenerate_inputs_rejected() {
    let cases = [
        (PricingInputs::new(100.0, 100.0, 0.0, 0.05, 0.2), Parameter::Expiry),
        (PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.0), Parameter::Volatility),
        (PricingInputs::new(0.0, 100.0, 1.0, 0.05, 0.2), Parameter::Spot),
        (PricingInputs::new(100.0, -1.0, 1.0, 0.05, 0.2), Parameter::Strike),
    ];
    for (inputs, parameter) in cases {
        match pricer_core::value(&inputs) {
            Err(InvalidDomainError::NonPositive { parameter: p, .. }) => assert_eq!(p, parameter),
            other => panic!("Expected NonPositive for {}, got {:?}", parameter, other),
        }
    }
}

/// Kernel values can be shared across threads without synchronisation.
#[test]
fn test_concurrent_invocations_agree() {
    let inputs = PricingInputs::new(105.0, 100.0, 0.5, 0.03, 0.25);
    let expected = pricer_core::value(&inputs).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || pricer_core::value(&inputs).unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_valuation_serialises_with_fixed_shape() {
    let valuation = pricer_core::value(&PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2)).unwrap();
    let json = serde_json::to_value(valuation).unwrap();

    assert!(json["price"].is_f64());
    for key in ["delta", "gamma", "theta", "vega", "rho"] {
        assert!(json["greeks"][key].is_f64(), "missing {}", key);
    }
}
