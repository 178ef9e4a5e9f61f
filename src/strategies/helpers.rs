pub use crate::engine::types::{Instrument, LegDef, OptionType, Side, StrategyDef};

pub fn option_leg(
    side: Side,
    option_type: OptionType,
    strike_pct: f64,
    premium_pct: f64,
    qty: u32,
) -> LegDef {
    LegDef {
        side,
        instrument: Instrument::Option,
        option_type: Some(option_type),
        strike_pct,
        premium_pct,
        qty,
    }
}

pub fn call_leg(side: Side, strike_pct: f64, premium_pct: f64, qty: u32) -> LegDef {
    option_leg(side, OptionType::Call, strike_pct, premium_pct, qty)
}

pub fn put_leg(side: Side, strike_pct: f64, premium_pct: f64, qty: u32) -> LegDef {
    option_leg(side, OptionType::Put, strike_pct, premium_pct, qty)
}

/// Underlying position entered at spot
pub fn underlying_leg(side: Side, qty: u32) -> LegDef {
    LegDef {
        side,
        instrument: Instrument::Underlying,
        option_type: None,
        strike_pct: 0.0,
        premium_pct: 0.0,
        qty,
    }
}

pub fn strategy(name: &str, category: &str, description: &str, legs: Vec<LegDef>) -> StrategyDef {
    StrategyDef {
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        legs,
    }
}
