use super::error::{EngineResult, PayoffError};

/// Grid step in percent of spot.
pub const STEP_PCT: f64 = 0.01;

/// Build the expiry price grid around `spot_price`.
///
/// Spans `spot * (100 - range) / 100` to `spot * (100 + range) / 100`
/// inclusive at a step of `spot / 10_000`. Each point is derived from its
/// index so rounding error does not accumulate along the grid.
pub fn price_grid(spot_price: f64, spot_range: f64) -> EngineResult<Vec<f64>> {
    if !spot_price.is_finite() || spot_price <= 0.0 {
        return Err(PayoffError::invalid_parameter(
            "spot_price",
            spot_price,
            "must be a positive finite number",
        ));
    }
    if !spot_range.is_finite() || spot_range < STEP_PCT || spot_range > 100.0 {
        return Err(PayoffError::invalid_parameter(
            "spot_range",
            spot_range,
            "must be between 0.01 and 100",
        ));
    }

    let lower_pct = 100.0 - spot_range;
    // Tolerance keeps e.g. 2 * 20 / 0.01 = 3999.9999... from losing the last point
    let steps = (2.0 * spot_range / STEP_PCT + 1e-6).floor() as usize;

    Ok((0..=steps)
        .map(|i| spot_price * (lower_pct + i as f64 * STEP_PCT) / 100.0)
        .collect())
}
