use super::helpers::*;

// ATM options priced at 3% of spot
pub fn long_call() -> StrategyDef {
    strategy("long_call", "Singles", "Buy a call option", vec![
        call_leg(Side::Long, 100.0, 3.0, 1),
    ])
}

pub fn short_call() -> StrategyDef {
    strategy("short_call", "Singles", "Sell a call option", vec![
        call_leg(Side::Short, 100.0, 3.0, 1),
    ])
}

pub fn long_put() -> StrategyDef {
    strategy("long_put", "Singles", "Buy a put option", vec![
        put_leg(Side::Long, 100.0, 3.0, 1),
    ])
}

pub fn short_put() -> StrategyDef {
    strategy("short_put", "Singles", "Sell a put option", vec![
        put_leg(Side::Short, 100.0, 3.0, 1),
    ])
}

pub fn long_underlying() -> StrategyDef {
    strategy("long_underlying", "Singles", "Buy the underlying at spot", vec![
        underlying_leg(Side::Long, 1),
    ])
}

pub fn short_underlying() -> StrategyDef {
    strategy("short_underlying", "Singles", "Sell the underlying short at spot", vec![
        underlying_leg(Side::Short, 1),
    ])
}

pub fn all() -> Vec<StrategyDef> {
    vec![
        long_call(), short_call(), long_put(), short_put(),
        long_underlying(), short_underlying(),
    ]
}
