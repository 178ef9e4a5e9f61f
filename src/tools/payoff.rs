use anyhow::{Context, Result};

use crate::engine::core::compute_strategy_payoff;
use crate::engine::types::LegSpec;
use crate::strategies::find_strategy;

use super::ai_format;
use super::response_types::PayoffResponse;

pub fn execute(
    legs: &[LegSpec],
    spot_price: f64,
    spot_range: f64,
    max_points: usize,
) -> Result<PayoffResponse> {
    let result = compute_strategy_payoff(legs, spot_range, spot_price)?;
    Ok(ai_format::format_payoff(&result, None, max_points))
}

pub fn execute_preset(
    name: &str,
    spot_price: f64,
    spot_range: f64,
    max_points: usize,
) -> Result<PayoffResponse> {
    let strategy = find_strategy(name).with_context(|| {
        format!("Unknown strategy '{name}'. Call list_strategies to see available presets.")
    })?;
    let result = compute_strategy_payoff(&strategy.leg_specs(spot_price), spot_range, spot_price)?;
    tracing::info!(strategy = %name, spot_price, spot_range, "Computed preset payoff");
    Ok(ai_format::format_payoff(&result, Some(name), max_points))
}
