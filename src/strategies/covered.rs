use super::helpers::{call_leg, put_leg, strategy, underlying_leg, Side, StrategyDef};

pub fn covered_call() -> StrategyDef {
    strategy(
        "covered_call",
        "Covered",
        "Hold the underlying and sell an OTM call against it",
        vec![underlying_leg(Side::Long, 1), call_leg(Side::Short, 105.0, 1.5, 1)],
    )
}

pub fn protective_put() -> StrategyDef {
    strategy(
        "protective_put",
        "Covered",
        "Hold the underlying and buy an OTM put as insurance",
        vec![underlying_leg(Side::Long, 1), put_leg(Side::Long, 95.0, 1.5, 1)],
    )
}

pub fn collar() -> StrategyDef {
    strategy(
        "collar",
        "Covered",
        "Hold the underlying, buy an OTM put and finance it with an OTM call",
        vec![
            underlying_leg(Side::Long, 1),
            put_leg(Side::Long, 95.0, 1.5, 1),
            call_leg(Side::Short, 105.0, 1.5, 1),
        ],
    )
}

/// Long stock with a short 110 call and a short 95 put; the default example.
pub fn covered_short_strangle() -> StrategyDef {
    strategy(
        "covered_short_strangle",
        "Covered",
        "Hold the underlying and sell an OTM call and an OTM put",
        vec![
            underlying_leg(Side::Long, 1),
            call_leg(Side::Short, 110.0, 2.0, 1),
            put_leg(Side::Short, 95.0, 6.0, 1),
        ],
    )
}

pub fn all() -> Vec<StrategyDef> {
    vec![covered_call(), protective_put(), collar(), covered_short_strangle()]
}
