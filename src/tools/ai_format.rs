use std::collections::HashMap;

use crate::engine::summary::summarize;
use crate::engine::types::{Leg, PayoffResult, PayoffSummary};

use super::response_types::{
    LegInfo, PayoffPoint, PayoffResponse, StrategiesResponse, StrategyInfo,
};

fn format_pnl(value: f64) -> String {
    if value >= 0.0 {
        format!("+${value:.2}")
    } else {
        format!("-${:.2}", value.abs())
    }
}

/// Premium received minus premium paid across all option legs
fn net_premium(result: &PayoffResult) -> f64 {
    result
        .legs
        .iter()
        .map(|l| match l.leg {
            Leg::Option {
                side,
                premium,
                contracts,
                ..
            } => -side.multiplier() * premium * f64::from(contracts),
            Leg::Underlying { .. } => 0.0,
        })
        .sum()
}

/// Grid indices to keep when reducing `len` points to at most `max_points`.
/// The first and last index are always included.
fn sample_indices(len: usize, max_points: usize) -> Vec<usize> {
    if len == 0 || max_points == 0 {
        return vec![];
    }
    if max_points == 1 {
        return vec![len - 1];
    }
    if len <= max_points {
        return (0..len).collect();
    }
    let step = (len - 1) as f64 / (max_points - 1) as f64;
    let mut indices: Vec<usize> = (0..max_points)
        .map(|i| ((i as f64 * step).round() as usize).min(len - 1))
        .collect();
    indices.dedup();
    indices
}

fn sample_curve(result: &PayoffResult, max_points: usize) -> Vec<PayoffPoint> {
    sample_indices(result.prices.len(), max_points)
        .into_iter()
        .map(|i| PayoffPoint {
            price: result.prices[i],
            legs: result.legs.iter().map(|l| l.payoffs[i]).collect(),
            total: result.total[i],
        })
        .collect()
}

fn key_findings(result: &PayoffResult, summary: &PayoffSummary) -> Vec<String> {
    let mut findings = Vec::new();

    let premium = net_premium(result);
    if premium > 0.0 {
        findings.push(format!("Net credit of ${premium:.2} collected from option premiums"));
    } else if premium < 0.0 {
        findings.push(format!("Net debit of ${:.2} paid for option premiums", premium.abs()));
    }

    findings.push(format!(
        "Payoff at spot ({:.2}): {}",
        result.spot_price,
        format_pnl(summary.payoff_at_spot)
    ));

    match summary.breakevens.as_slice() {
        [] if summary.max_loss.payoff >= 0.0 => {
            findings.push("No breakeven within the grid: payoff is never negative".to_string());
        }
        [] if summary.max_profit.payoff <= 0.0 => {
            findings.push("No breakeven within the grid: payoff is never positive".to_string());
        }
        [] => {}
        points => {
            let formatted: Vec<String> = points.iter().map(|p| format!("{p:.2}")).collect();
            findings.push(format!("Breakeven price(s): {}", formatted.join(", ")));
        }
    }

    let last = result.total.len() - 1;
    let edge_profit = result.total[0] >= summary.max_profit.payoff
        || result.total[last] >= summary.max_profit.payoff;
    let edge_loss = result.total[0] <= summary.max_loss.payoff
        || result.total[last] <= summary.max_loss.payoff;
    if edge_profit && summary.max_profit.payoff > 0.0 {
        findings.push(format!(
            "Max profit is reached at the edge of the grid ({:.2}-{:.2}); it may grow beyond it",
            summary.grid_min, summary.grid_max
        ));
    }
    if edge_loss && summary.max_loss.payoff < 0.0 {
        findings.push(format!(
            "Max loss is reached at the edge of the grid ({:.2}-{:.2}); it may grow beyond it",
            summary.grid_min, summary.grid_max
        ));
    }

    findings
}

pub fn format_payoff(
    result: &PayoffResult,
    strategy: Option<&str>,
    max_points: usize,
) -> PayoffResponse {
    let summary = summarize(result);
    let name = strategy.unwrap_or("Custom strategy");

    let breakeven_text = match summary.breakevens.len() {
        0 => "no breakeven".to_string(),
        1 => "1 breakeven".to_string(),
        n => format!("{n} breakevens"),
    };

    let summary_text = format!(
        "{name} with {} leg(s) over {:.2}-{:.2}: max profit {} at {:.2}, max loss {} at {:.2}, {breakeven_text}.",
        result.legs.len(),
        summary.grid_min,
        summary.grid_max,
        format_pnl(summary.max_profit.payoff),
        summary.max_profit.price,
        format_pnl(summary.max_loss.payoff),
        summary.max_loss.price,
    );

    PayoffResponse {
        summary: summary_text,
        strategy: strategy.map(str::to_string),
        spot_price: result.spot_price,
        spot_range: result.spot_range,
        legs: result
            .legs
            .iter()
            .map(|l| LegInfo {
                label: l.label.clone(),
                leg: l.leg,
            })
            .collect(),
        key_findings: key_findings(result, &summary),
        curve: sample_curve(result, max_points),
        payoff_summary: summary,
        suggested_next_steps: vec![
            "Adjust strikes, premiums or contracts and call compute_payoff again to compare profiles"
                .to_string(),
            "Widen spot_range if max profit or max loss sits at the edge of the grid".to_string(),
            "Use list_strategies to start from a preset and strategy_payoff to evaluate it"
                .to_string(),
        ],
    }
}

pub fn format_strategies(strategies: Vec<StrategyInfo>) -> StrategiesResponse {
    let total = strategies.len();
    let mut categories: HashMap<String, usize> = HashMap::new();
    for s in &strategies {
        *categories.entry(s.category.clone()).or_default() += 1;
    }

    let cat_parts: Vec<String> = {
        let mut sorted: Vec<_> = categories.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        sorted
            .iter()
            .map(|(cat, count)| format!("{cat} ({count})"))
            .collect()
    };

    let summary = format!(
        "{} strategies available across {} categories: {}.",
        total,
        categories.len(),
        cat_parts.join(", "),
    );

    StrategiesResponse {
        summary,
        total,
        categories,
        strategies,
        suggested_next_steps: vec![
            "Use strategy_payoff with a strategy name to see its payoff profile".to_string(),
            "Use compute_payoff with custom legs to model your own position".to_string(),
        ],
    }
}
