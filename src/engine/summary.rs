use ordered_float::OrderedFloat;
use std::cmp::Reverse;

use super::types::{Extremum, PayoffResult, PayoffSummary};

/// Prices where the total payoff crosses or touches zero.
///
/// Sign changes between adjacent grid points are located by linear
/// interpolation. A run of exact zeros contributes only its first price.
pub fn find_breakevens(prices: &[f64], total: &[f64]) -> Vec<f64> {
    let mut breakevens = Vec::new();
    for (i, &y) in total.iter().enumerate() {
        if y == 0.0 {
            if i == 0 || total[i - 1] != 0.0 {
                breakevens.push(prices[i]);
            }
            continue;
        }
        if let Some(&next) = total.get(i + 1) {
            if next != 0.0 && y.signum() != next.signum() {
                let x = prices[i] + (prices[i + 1] - prices[i]) * (-y / (next - y));
                breakevens.push(x);
            }
        }
    }
    breakevens
}

/// Linearly interpolate `values` at `x` over the increasing grid `prices`.
/// Points outside the grid take the nearest edge value.
pub fn interpolate(prices: &[f64], values: &[f64], x: f64) -> f64 {
    let idx = prices.partition_point(|&p| p < x);
    if idx == 0 {
        return values[0];
    }
    if idx >= prices.len() {
        return values[values.len() - 1];
    }
    let (x0, x1) = (prices[idx - 1], prices[idx]);
    let (y0, y1) = (values[idx - 1], values[idx]);
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Summarize the total payoff of a computed strategy.
///
/// Ties for max profit and max loss resolve to the lowest grid price.
pub fn summarize(result: &PayoffResult) -> PayoffSummary {
    let prices = &result.prices;
    let total = &result.total;

    let (max_idx, _) = total
        .iter()
        .enumerate()
        .max_by_key(|&(i, y)| (OrderedFloat(*y), Reverse(i)))
        .unwrap_or((0, &0.0));
    let (min_idx, _) = total
        .iter()
        .enumerate()
        .min_by_key(|&(_, y)| OrderedFloat(*y))
        .unwrap_or((0, &0.0));

    PayoffSummary {
        max_profit: Extremum {
            price: prices[max_idx],
            payoff: total[max_idx],
        },
        max_loss: Extremum {
            price: prices[min_idx],
            payoff: total[min_idx],
        },
        breakevens: find_breakevens(prices, total),
        payoff_at_spot: interpolate(prices, total, result.spot_price),
        grid_min: prices[0],
        grid_max: prices[prices.len() - 1],
        grid_points: prices.len(),
    }
}
