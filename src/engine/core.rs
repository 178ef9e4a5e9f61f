use super::error::{EngineResult, PayoffError};
use super::grid::price_grid;
use super::payoff::{aggregate, leg_payoff};
use super::types::{Instrument, Leg, LegPayoff, LegSpec, PayoffResult};
use super::validate::{validate_instrument, validate_option_type, validate_trade_direction};

fn ensure_finite(leg: usize, field: &str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PayoffError::InvalidLeg {
            leg,
            reason: format!("{field} must be a finite number, got {value}"),
        })
    }
}

fn ensure_non_negative(leg: usize, field: &str, value: f64) -> EngineResult<f64> {
    let value = ensure_finite(leg, field, value)?;
    if value < 0.0 {
        return Err(PayoffError::InvalidLeg {
            leg,
            reason: format!("{field} must not be negative, got {value}"),
        });
    }
    Ok(value)
}

/// Validate a caller-supplied leg and apply its defaults.
///
/// `leg` is the 1-based position of the leg in the strategy and is only used
/// for error reporting. Categorical fields are checked in the order
/// instrument, trade, option type. Numeric fields are checked afterwards,
/// and only those that belong to the resolved instrument.
pub fn resolve_leg(leg: usize, spec: &LegSpec, spot_price: f64) -> EngineResult<Leg> {
    let instrument = spec
        .instrument
        .as_deref()
        .ok_or_else(|| PayoffError::missing_field(leg, "instrument"))
        .and_then(validate_instrument)?;

    let side = spec
        .trade
        .as_deref()
        .ok_or_else(|| PayoffError::missing_field(leg, "trade"))
        .and_then(validate_trade_direction)?;

    let option_type = match instrument {
        Instrument::Option => Some(
            spec.option_type
                .as_deref()
                .ok_or_else(|| PayoffError::missing_field(leg, "option_type"))
                .and_then(validate_option_type)?,
        ),
        Instrument::Underlying => None,
    };

    let contracts = match spec.contracts.unwrap_or(1) {
        0 => {
            return Err(PayoffError::InvalidLeg {
                leg,
                reason: "contracts must be at least 1".to_string(),
            })
        }
        n => n,
    };

    match option_type {
        Some(option_type) => {
            let strike = spec
                .strike
                .ok_or_else(|| PayoffError::missing_field(leg, "strike"))?;
            Ok(Leg::Option {
                side,
                option_type,
                strike: ensure_non_negative(leg, "strike", strike)?,
                premium: ensure_non_negative(leg, "premium", spec.premium.unwrap_or(0.0))?,
                contracts,
            })
        }
        None => Ok(Leg::Underlying {
            side,
            entry_price: ensure_finite(leg, "entry_price", spec.entry_price.unwrap_or(spot_price))?,
            contracts,
        }),
    }
}

/// Compute per-leg and total payoff curves for a strategy.
///
/// The grid parameters are checked first, then every leg is resolved before
/// any payoff is computed, so a single bad leg fails the whole call and no
/// partial result is produced.
pub fn compute_strategy_payoff(
    legs: &[LegSpec],
    spot_range: f64,
    spot_price: f64,
) -> EngineResult<PayoffResult> {
    if legs.is_empty() {
        return Err(PayoffError::EmptyStrategy);
    }

    let prices = price_grid(spot_price, spot_range)?;

    let resolved = legs
        .iter()
        .enumerate()
        .map(|(i, spec)| resolve_leg(i + 1, spec, spot_price))
        .collect::<EngineResult<Vec<Leg>>>()?;

    let leg_payoffs: Vec<LegPayoff> = resolved
        .into_iter()
        .map(|leg| {
            let label = leg.label();
            tracing::debug!(%label, points = prices.len(), "Computing leg payoff");
            LegPayoff {
                payoffs: leg_payoff(&leg, &prices),
                label,
                leg,
            }
        })
        .collect();

    let total = aggregate(
        prices.len(),
        leg_payoffs.iter().map(|l| l.payoffs.as_slice()),
    );

    Ok(PayoffResult {
        spot_price,
        spot_range,
        prices,
        legs: leg_payoffs,
        total,
    })
}
