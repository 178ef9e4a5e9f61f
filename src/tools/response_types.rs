use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::engine::types::{Leg, PayoffSummary};

/// AI-enriched response for `compute_payoff` and `strategy_payoff`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PayoffResponse {
    pub summary: String,
    pub strategy: Option<String>,
    pub spot_price: f64,
    pub spot_range: f64,
    pub legs: Vec<LegInfo>,
    pub payoff_summary: PayoffSummary,
    pub key_findings: Vec<String>,
    /// Down-sampled curve; first and last grid points are always kept
    pub curve: Vec<PayoffPoint>,
    pub suggested_next_steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LegInfo {
    pub label: String,
    pub leg: Leg,
}

/// One renderable row: a grid price, each leg's payoff in leg order, and the total
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PayoffPoint {
    pub price: f64,
    pub legs: Vec<f64>,
    pub total: f64,
}

/// AI-enriched response for `list_strategies`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StrategiesResponse {
    pub summary: String,
    pub total: usize,
    pub categories: HashMap<String, usize>,
    pub strategies: Vec<StrategyInfo>,
    pub suggested_next_steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StrategyInfo {
    pub name: String,
    pub category: String,
    pub legs: usize,
    pub description: String,
}
