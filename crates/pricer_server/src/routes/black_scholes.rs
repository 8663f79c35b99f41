//! Black-Scholes call valuation endpoint
//!
//! Parses and validates the five model inputs, runs the pricing kernel once
//! and returns the price together with all five Greeks.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use pricer_core::analytical::BlackScholesCall;
use pricer_core::types::{CallValuation, Greeks, PricingInputs};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::ApiError;

/// Valuation request
///
/// `stockPrice` is accepted as an alias of `spotPrice`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackScholesRequest {
    #[serde(alias = "stockPrice")]
    pub spot_price: f64,
    pub strike_price: f64,
    pub time_to_expiry: f64,
    pub risk_free_rate: f64,
    pub volatility: f64,
}

impl BlackScholesRequest {
    /// Reject non-finite fields before they reach the kernel
    pub fn validate(&self) -> Result<(), ApiError> {
        let fields = [
            ("spotPrice", self.spot_price),
            ("strikePrice", self.strike_price),
            ("timeToExpiry", self.time_to_expiry),
            ("riskFreeRate", self.risk_free_rate),
            ("volatility", self.volatility),
        ];
        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(ApiError::InvalidRequest(format!(
                "{} must be a finite number, got {}",
                name, value
            ))),
            None => Ok(()),
        }
    }

    pub fn to_inputs(&self) -> PricingInputs {
        PricingInputs::new(
            self.spot_price,
            self.strike_price,
            self.time_to_expiry,
            self.risk_free_rate,
            self.volatility,
        )
    }
}

/// Valuation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlackScholesResponse {
    pub price: f64,
    pub greeks: Greeks,
}

impl From<CallValuation> for BlackScholesResponse {
    fn from(valuation: CallValuation) -> Self {
        Self {
            price: valuation.price,
            greeks: valuation.greeks,
        }
    }
}

/// Build the valuation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/black-scholes", post(black_scholes_handler))
        .route("/api/v1/black-scholes", post(black_scholes_handler))
}

/// POST /black-scholes - European call price and Greeks
async fn black_scholes_handler(
    State(state): State<AppState>,
    payload: Result<Json<BlackScholesRequest>, JsonRejection>,
) -> Result<Json<BlackScholesResponse>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    let inputs = request.to_inputs();
    let policy = state.config.domain_policy;

    let started = Instant::now();
    let result = BlackScholesCall::with_policy(inputs, policy).map(|call| call.valuation());
    metrics::histogram!("pricing_kernel_seconds").record(started.elapsed().as_secs_f64());
    metrics::counter!("pricing_requests_total").increment(1);

    match result {
        Ok(valuation) => {
            tracing::debug!(
                spot = inputs.spot,
                strike = inputs.strike,
                expiry = inputs.expiry,
                rate = inputs.rate,
                volatility = inputs.volatility,
                price = valuation.price,
                "Call valued"
            );
            Ok(Json(valuation.into()))
        }
        Err(err) => {
            metrics::counter!("pricing_domain_errors_total").increment(1);
            tracing::warn!(
                parameter = %err.parameter(),
                value = err.value(),
                %policy,
                "Rejected out-of-domain inputs"
            );
            Err(err.into())
        }
    }
}
