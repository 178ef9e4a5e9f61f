use super::helpers::{call_leg, put_leg, strategy, Side, StrategyDef};

pub fn long_call_condor() -> StrategyDef {
    strategy("long_call_condor", "Condors", "Buy 1 lowest call, sell 1 lower-mid call, sell 1 upper-mid call, buy 1 highest call", vec![
        call_leg(Side::Long, 90.0, 10.5, 1),
        call_leg(Side::Short, 95.0, 6.5, 1),
        call_leg(Side::Short, 105.0, 1.5, 1),
        call_leg(Side::Long, 110.0, 0.5, 1),
    ])
}

pub fn short_call_condor() -> StrategyDef {
    strategy("short_call_condor", "Condors", "Sell 1 lowest call, buy 1 lower-mid call, buy 1 upper-mid call, sell 1 highest call", vec![
        call_leg(Side::Short, 90.0, 10.5, 1),
        call_leg(Side::Long, 95.0, 6.5, 1),
        call_leg(Side::Long, 105.0, 1.5, 1),
        call_leg(Side::Short, 110.0, 0.5, 1),
    ])
}

pub fn long_put_condor() -> StrategyDef {
    strategy("long_put_condor", "Condors", "Buy 1 lowest put, sell 1 lower-mid put, sell 1 upper-mid put, buy 1 highest put", vec![
        put_leg(Side::Long, 90.0, 0.5, 1),
        put_leg(Side::Short, 95.0, 1.5, 1),
        put_leg(Side::Short, 105.0, 6.5, 1),
        put_leg(Side::Long, 110.0, 10.5, 1),
    ])
}

pub fn short_put_condor() -> StrategyDef {
    strategy("short_put_condor", "Condors", "Sell 1 lowest put, buy 1 lower-mid put, buy 1 upper-mid put, sell 1 highest put", vec![
        put_leg(Side::Short, 90.0, 0.5, 1),
        put_leg(Side::Long, 95.0, 1.5, 1),
        put_leg(Side::Long, 105.0, 6.5, 1),
        put_leg(Side::Short, 110.0, 10.5, 1),
    ])
}

pub fn all() -> Vec<StrategyDef> {
    vec![
        long_call_condor(), short_call_condor(),
        long_put_condor(), short_put_condor(),
    ]
}
