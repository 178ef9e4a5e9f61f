//! Integration tests for the payoff engine and the preset catalog.
//!
//! Custom-leg tests check the worked examples and algebraic properties of the
//! engine (sign symmetry, aggregation, purity, grid shape). Preset tests
//! evaluate catalog strategies at spot 100 (range 20, grid 80..120) and
//! compare the total payoff to hand-calculated values at a few prices.

use payoff_mcp::engine::core::compute_strategy_payoff;
use payoff_mcp::engine::error::PayoffError;
use payoff_mcp::engine::summary::summarize;
use payoff_mcp::engine::types::{LegSpec, DEFAULT_SPOT_PRICE, DEFAULT_SPOT_RANGE};
use payoff_mcp::strategies::{all_strategies, default_strategy, find_strategy};

mod common;
use common::{assert_close, default_example_legs, grid_index, option, underlying};

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn total_at(legs: &[LegSpec], x: f64) -> f64 {
    let result = compute_strategy_payoff(legs, DEFAULT_SPOT_RANGE, DEFAULT_SPOT_PRICE).unwrap();
    result.total[grid_index(&result.prices, x)]
}

/// Assert a preset's total payoff at spot 100 for each `(price, expected)`.
fn assert_preset(name: &str, expected: &[(f64, f64)]) {
    let strategy = find_strategy(name).unwrap_or_else(|| panic!("{name}: not in catalog"));
    let legs = strategy.leg_specs(DEFAULT_SPOT_PRICE);
    for &(x, payoff) in expected {
        assert_close(total_at(&legs, x), payoff, &format!("{name} at {x}"));
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Worked examples
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn long_call_110_premium_2() {
    // max(100-110,0)-2 = -2; max(120-110,0)-2 = 8
    let legs = vec![option("long", "call", 110.0, 2.0, 1)];
    assert_close(total_at(&legs, 100.0), -2.0, "x=100");
    assert_close(total_at(&legs, 120.0), 8.0, "x=120");
}

#[test]
fn short_put_95_premium_6() {
    // -(max(95-100,0)-6) = 6; -(max(95-80,0)-6) = -9
    let legs = vec![option("short", "put", 95.0, 6.0, 1)];
    assert_close(total_at(&legs, 100.0), 6.0, "x=100");
    assert_close(total_at(&legs, 80.0), -9.0, "x=80");
}

#[test]
fn long_underlying_two_contracts() {
    // (110-100)*2 = 20
    let legs = vec![underlying("long", Some(100.0), 2)];
    assert_close(total_at(&legs, 110.0), 20.0, "x=110");
}

#[test]
fn contracts_default_to_one_and_premium_to_zero() {
    let legs = vec![LegSpec {
        instrument: Some("option".to_string()),
        trade: Some("long".to_string()),
        option_type: Some("put".to_string()),
        strike: Some(100.0),
        ..LegSpec::default()
    }];
    assert_close(total_at(&legs, 90.0), 10.0, "x=90");
    assert_close(total_at(&legs, 110.0), 0.0, "x=110");
}

// ═══════════════════════════════════════════════════════════════════════════════
// Properties
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn long_and_short_are_mirror_images() {
    let pairs = [
        (option("long", "call", 104.0, 2.75, 3), option("short", "call", 104.0, 2.75, 3)),
        (option("long", "put", 91.5, 0.8, 2), option("short", "put", 91.5, 0.8, 2)),
        (underlying("long", Some(98.0), 4), underlying("short", Some(98.0), 4)),
        (underlying("long", None, 1), underlying("short", None, 1)),
    ];
    for (long, short) in pairs {
        let l = compute_strategy_payoff(&[long], 20.0, 100.0).unwrap();
        let s = compute_strategy_payoff(&[short], 20.0, 100.0).unwrap();
        for (a, b) in l.total.iter().zip(&s.total) {
            assert_eq!(*a, -*b);
        }
    }
}

#[test]
fn total_equals_sum_of_legs_at_every_price() {
    let mut legs = default_example_legs();
    legs.push(option("long", "call", 120.0, 0.5, 5));
    legs.push(underlying("short", Some(101.0), 2));
    let result = compute_strategy_payoff(&legs, 20.0, 100.0).unwrap();
    for i in 0..result.prices.len() {
        let sum: f64 = result.legs.iter().map(|l| l.payoffs[i]).sum();
        assert!((result.total[i] - sum).abs() < 1e-9, "mismatch at index {i}");
    }
}

#[test]
fn leg_order_does_not_change_total() {
    let legs = default_example_legs();
    let mut reversed = legs.clone();
    reversed.reverse();
    let a = compute_strategy_payoff(&legs, 20.0, 100.0).unwrap();
    let b = compute_strategy_payoff(&reversed, 20.0, 100.0).unwrap();
    for (x, y) in a.total.iter().zip(&b.total) {
        assert!((x - y).abs() < 1e-9);
    }
    assert_eq!(a.legs[0].label, b.legs[2].label);
}

#[test]
fn identical_inputs_give_identical_results() {
    let legs = default_example_legs();
    let a = compute_strategy_payoff(&legs, 12.5, 57.0).unwrap();
    let b = compute_strategy_payoff(&legs, 12.5, 57.0).unwrap();
    assert_eq!(a.prices, b.prices);
    assert_eq!(a.total, b.total);
}

#[test]
fn default_grid_is_80_to_120_step_one_cent() {
    let result = compute_strategy_payoff(&default_example_legs(), 20.0, 100.0).unwrap();
    let prices = &result.prices;
    assert_close(prices[0], 80.0, "first price");
    assert_close(prices[prices.len() - 1], 120.0, "last price");
    for pair in prices.windows(2) {
        assert!((pair[1] - pair[0] - 0.01).abs() < 1e-9);
    }
}

#[test]
fn entry_price_defaults_to_spot() {
    let legs = vec![underlying("long", None, 1)];
    let result = compute_strategy_payoff(&legs, 10.0, 250.0).unwrap();
    let at_spot = result.total[grid_index(&result.prices, 250.0)];
    assert!(at_spot.abs() < 1e-9);
    assert_eq!(result.legs[0].label, "1 Long Underlying  Entry:250");
}

#[test]
fn default_example_summary() {
    let legs = default_strategy().leg_specs(100.0);
    let result = compute_strategy_payoff(&legs, 20.0, 100.0).unwrap();
    let summary = summarize(&result);
    assert_close(summary.max_profit.payoff, 18.0, "max profit");
    assert!(summary.max_profit.price > 110.0 - 1e-6);
    assert_close(summary.max_loss.payoff, -27.0, "max loss");
    assert_eq!(summary.breakevens.len(), 1);
    assert!((summary.breakevens[0] - 93.5).abs() < 1e-6);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Failure semantics
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn stock_instrument_is_rejected() {
    let legs = vec![LegSpec {
        instrument: Some("stock".to_string()),
        trade: Some("long".to_string()),
        ..LegSpec::default()
    }];
    assert!(matches!(
        compute_strategy_payoff(&legs, 20.0, 100.0),
        Err(PayoffError::InvalidEnumeration {
            field: "instrument",
            ..
        })
    ));
}

#[test]
fn buy_trade_is_rejected() {
    let legs = vec![option("buy", "call", 100.0, 1.0, 1)];
    assert!(matches!(
        compute_strategy_payoff(&legs, 20.0, 100.0),
        Err(PayoffError::InvalidEnumeration { field: "trade", .. })
    ));
}

#[test]
fn single_letter_short_is_rejected() {
    let legs = vec![option("s", "put", 100.0, 1.0, 1)];
    assert!(compute_strategy_payoff(&legs, 20.0, 100.0).is_err());
}

#[test]
fn categorical_fields_are_case_insensitive() {
    let legs = vec![option("SHORT", "Put", 95.0, 6.0, 1)];
    let result = compute_strategy_payoff(&legs, 20.0, 100.0).unwrap();
    assert_eq!(result.legs[0].label, "1 Short Put  ST:95  Pr:6");
}

#[test]
fn missing_strike_reports_leg_position() {
    let mut legs = default_example_legs();
    legs[2].strike = None;
    assert_eq!(
        compute_strategy_payoff(&legs, 20.0, 100.0).unwrap_err(),
        PayoffError::MissingField {
            leg: 3,
            field: "strike"
        }
    );
}

#[test]
fn missing_option_type_is_reported() {
    let mut legs = vec![option("long", "call", 100.0, 1.0, 1)];
    legs[0].option_type = None;
    assert_eq!(
        compute_strategy_payoff(&legs, 20.0, 100.0).unwrap_err(),
        PayoffError::MissingField {
            leg: 1,
            field: "option_type"
        }
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Presets at spot 100
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn preset_long_call() {
    // L Call@100 for 3
    assert_preset("long_call", &[(80.0, -3.0), (100.0, -3.0), (120.0, 17.0)]);
}

#[test]
fn preset_short_underlying() {
    assert_preset("short_underlying", &[(110.0, -10.0), (90.0, 10.0)]);
}

#[test]
fn preset_covered_call() {
    // U long + S Call@105 for 1.5
    assert_preset("covered_call", &[(80.0, -18.5), (120.0, 6.5)]);
}

#[test]
fn preset_protective_put() {
    // U long + L Put@95 for 1.5
    assert_preset("protective_put", &[(80.0, -6.5), (120.0, 18.5)]);
}

#[test]
fn preset_collar() {
    // U long + L Put@95 for 1.5 + S Call@105 for 1.5, zero-cost
    assert_preset("collar", &[(80.0, -5.0), (100.0, 0.0), (120.0, 5.0)]);
}

#[test]
fn preset_covered_short_strangle() {
    // x - 92 - max(x-110,0) - max(95-x,0)
    assert_preset(
        "covered_short_strangle",
        &[(80.0, -27.0), (93.5, 0.0), (100.0, 8.0), (120.0, 18.0)],
    );
}

#[test]
fn preset_bull_call_spread() {
    // L Call@100 for 3, S Call@105 for 1: debit 2, width 5
    assert_preset("bull_call_spread", &[(80.0, -2.0), (102.0, 0.0), (120.0, 3.0)]);
}

#[test]
fn preset_long_straddle() {
    // L Call@100 + L Put@100, 3 each
    assert_preset("long_straddle", &[(80.0, 14.0), (100.0, -6.0), (120.0, 14.0)]);
}

#[test]
fn preset_long_call_butterfly() {
    // L Call@95 for 6, S 2x Call@100 for 3, L Call@105 for 1: debit 1
    assert_preset("long_call_butterfly", &[(80.0, -1.0), (100.0, 4.0), (120.0, -1.0)]);
}

#[test]
fn preset_iron_condor() {
    // credit 2, wings 5 wide
    assert_preset("iron_condor", &[(80.0, -3.0), (100.0, 2.0), (120.0, -3.0)]);
}

#[test]
fn preset_long_put_condor() {
    // debit 3; inner strikes 95/105
    assert_preset("long_put_condor", &[(80.0, -3.0), (100.0, 2.0), (120.0, -3.0)]);
}

#[test]
fn presets_scale_linearly_with_spot() {
    for strategy in all_strategies() {
        let base = compute_strategy_payoff(&strategy.leg_specs(100.0), 20.0, 100.0).unwrap();
        let scaled = compute_strategy_payoff(&strategy.leg_specs(300.0), 20.0, 300.0).unwrap();
        assert_eq!(base.prices.len(), scaled.prices.len());
        for (a, b) in base.total.iter().zip(&scaled.total) {
            assert!(
                (3.0 * a - b).abs() < 1e-8,
                "{}: expected {}, got {b}",
                strategy.name,
                3.0 * a
            );
        }
    }
}
