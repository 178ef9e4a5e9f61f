#![allow(dead_code)]

use payoff_mcp::engine::types::LegSpec;

pub const TOL: f64 = 1e-9;

pub fn option(trade: &str, option_type: &str, strike: f64, premium: f64, contracts: u32) -> LegSpec {
    LegSpec {
        instrument: Some("option".to_string()),
        trade: Some(trade.to_string()),
        option_type: Some(option_type.to_string()),
        strike: Some(strike),
        premium: Some(premium),
        contracts: Some(contracts),
        entry_price: None,
    }
}

pub fn underlying(trade: &str, entry_price: Option<f64>, contracts: u32) -> LegSpec {
    LegSpec {
        instrument: Some("underlying".to_string()),
        trade: Some(trade.to_string()),
        contracts: Some(contracts),
        entry_price,
        ..LegSpec::default()
    }
}

/// Long underlying at spot, short 110 call for 2, short 95 put for 6.
pub fn default_example_legs() -> Vec<LegSpec> {
    vec![
        underlying("long", None, 1),
        option("short", "call", 110.0, 2.0, 1),
        option("short", "put", 95.0, 6.0, 1),
    ]
}

/// Index of the grid point closest to `x`.
pub fn grid_index(prices: &[f64], x: f64) -> usize {
    prices
        .iter()
        .enumerate()
        .min_by(|a, b| (a.1 - x).abs().total_cmp(&(b.1 - x).abs()))
        .map(|(i, _)| i)
        .unwrap()
}

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < TOL,
        "{what}: expected {expected}, got {actual}"
    );
}
