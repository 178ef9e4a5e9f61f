pub mod butterflies;
pub mod condors;
pub mod covered;
pub mod helpers;
pub mod iron;
pub mod singles;
pub mod spreads;

use crate::engine::types::StrategyDef;

/// Preset used when the caller does not name one.
pub const DEFAULT_STRATEGY: &str = "covered_short_strangle";

pub fn all_strategies() -> Vec<StrategyDef> {
    let mut strategies = Vec::new();
    strategies.extend(singles::all());
    strategies.extend(covered::all());
    strategies.extend(spreads::all());
    strategies.extend(butterflies::all());
    strategies.extend(condors::all());
    strategies.extend(iron::all());
    strategies
}

pub fn find_strategy(name: &str) -> Option<StrategyDef> {
    all_strategies().into_iter().find(|s| s.name == name)
}

pub fn default_strategy() -> StrategyDef {
    covered::covered_short_strangle()
}
