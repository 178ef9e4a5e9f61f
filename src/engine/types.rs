use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-width of the price grid, in percent of spot.
pub const DEFAULT_SPOT_RANGE: f64 = 20.0;
/// Reference price the grid is centered on.
pub const DEFAULT_SPOT_PRICE: f64 = 100.0;

pub const INSTRUMENTS: &[&str] = &["option", "underlying"];
pub const OPTION_TYPES: &[&str] = &["call", "put"];
pub const TRADE_DIRECTIONS: &[&str] = &["long", "short"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Option,
    Underlying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Long = 1,
    Short = -1,
}

impl Side {
    pub fn multiplier(self) -> f64 {
        match self {
            Side::Long => 1.0,
            Side::Short => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instrument::Option => write!(f, "Option"),
            Instrument::Underlying => write!(f, "Underlying"),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Long => write!(f, "Long"),
            Side::Short => write!(f, "Short"),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// A strategy leg as supplied by the caller.
///
/// Categorical fields stay as strings here so they can be checked
/// case-insensitively and reported verbatim when invalid. Use
/// [`crate::engine::core::resolve_leg`] to turn this into a [`Leg`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct LegSpec {
    /// "option" or "underlying"
    pub instrument: Option<String>,
    /// "long" or "short"
    pub trade: Option<String>,
    /// "call" or "put" (option legs only)
    #[serde(alias = "type")]
    pub option_type: Option<String>,
    /// Exercise price (option legs only)
    pub strike: Option<f64>,
    /// Premium per unit, defaults to 0 (option legs only)
    pub premium: Option<f64>,
    /// Position multiplier, defaults to 1
    #[serde(alias = "contract")]
    pub contracts: Option<u32>,
    /// Entry price, defaults to spot (underlying legs only)
    #[serde(alias = "entry")]
    pub entry_price: Option<f64>,
}

/// A validated leg with every default applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "instrument", rename_all = "lowercase")]
pub enum Leg {
    Option {
        side: Side,
        option_type: OptionType,
        strike: f64,
        premium: f64,
        contracts: u32,
    },
    Underlying {
        side: Side,
        entry_price: f64,
        contracts: u32,
    },
}

impl Leg {
    pub fn instrument(&self) -> Instrument {
        match self {
            Leg::Option { .. } => Instrument::Option,
            Leg::Underlying { .. } => Instrument::Underlying,
        }
    }

    pub fn side(&self) -> Side {
        match *self {
            Leg::Option { side, .. } | Leg::Underlying { side, .. } => side,
        }
    }

    pub fn contracts(&self) -> u32 {
        match *self {
            Leg::Option { contracts, .. } | Leg::Underlying { contracts, .. } => contracts,
        }
    }

    /// Display label, e.g. `1 Short Call  ST:110  Pr:2`.
    pub fn label(&self) -> String {
        match *self {
            Leg::Option {
                side,
                option_type,
                strike,
                premium,
                contracts,
            } => format!("{contracts} {side} {option_type}  ST:{strike}  Pr:{premium}"),
            Leg::Underlying {
                side,
                entry_price,
                contracts,
            } => format!("{contracts} {side} Underlying  Entry:{entry_price}"),
        }
    }
}

/// A preset leg with strike and premium expressed relative to spot.
#[derive(Debug, Clone)]
pub struct LegDef {
    pub side: Side,
    pub instrument: Instrument,
    pub option_type: Option<OptionType>,
    /// Strike in percent of spot
    pub strike_pct: f64,
    /// Premium in percent of spot
    pub premium_pct: f64,
    pub qty: u32,
}

impl LegDef {
    /// Materialize the leg for a concrete spot price.
    /// Underlying legs leave `entry_price` unset so it defaults to spot.
    pub fn to_spec(&self, spot_price: f64) -> LegSpec {
        let is_option = self.instrument == Instrument::Option;
        LegSpec {
            instrument: Some(self.instrument.to_string().to_lowercase()),
            trade: Some(self.side.to_string().to_lowercase()),
            option_type: self.option_type.map(|t| t.to_string().to_lowercase()),
            strike: is_option.then(|| spot_price * self.strike_pct / 100.0),
            premium: is_option.then(|| spot_price * self.premium_pct / 100.0),
            contracts: Some(self.qty),
            entry_price: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StrategyDef {
    pub name: String,
    pub category: String,
    pub description: String,
    pub legs: Vec<LegDef>,
}

impl StrategyDef {
    pub fn leg_specs(&self, spot_price: f64) -> Vec<LegSpec> {
        self.legs.iter().map(|l| l.to_spec(spot_price)).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LegPayoff {
    pub label: String,
    pub leg: Leg,
    pub payoffs: Vec<f64>,
}

/// Payoff curves of a strategy over a price grid.
///
/// Every `payoffs` vector and `total` has the same length as `prices`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PayoffResult {
    pub spot_price: f64,
    pub spot_range: f64,
    pub prices: Vec<f64>,
    pub legs: Vec<LegPayoff>,
    pub total: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Extremum {
    pub price: f64,
    pub payoff: f64,
}

/// Key figures of a strategy's total payoff, measured within the grid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PayoffSummary {
    pub max_profit: Extremum,
    pub max_loss: Extremum,
    pub breakevens: Vec<f64>,
    pub payoff_at_spot: f64,
    pub grid_min: f64,
    pub grid_max: f64,
    pub grid_points: usize,
}
