use super::types::{Leg, OptionType, Side};

/// Value of exercising the option at `price`, ignoring premium
pub fn intrinsic(option_type: OptionType, strike: f64, price: f64) -> f64 {
    match option_type {
        OptionType::Call => (price - strike).max(0.0),
        OptionType::Put => (strike - price).max(0.0),
    }
}

/// Per-unit payoff of an option leg at expiry.
///
/// A long holder receives intrinsic value and paid the premium; a short
/// writer is the mirror image.
pub fn option_unit_payoff(
    option_type: OptionType,
    strike: f64,
    premium: f64,
    side: Side,
    price: f64,
) -> f64 {
    (intrinsic(option_type, strike, price) - premium) * side.multiplier()
}

/// Per-unit payoff of an underlying position entered at `entry_price`
pub fn underlying_unit_payoff(entry_price: f64, side: Side, price: f64) -> f64 {
    (price - entry_price) * side.multiplier()
}

/// Payoff of a whole leg at a single price
pub fn leg_payoff_at(leg: &Leg, price: f64) -> f64 {
    match *leg {
        Leg::Option {
            side,
            option_type,
            strike,
            premium,
            contracts,
        } => option_unit_payoff(option_type, strike, premium, side, price) * f64::from(contracts),
        Leg::Underlying {
            side,
            entry_price,
            contracts,
        } => underlying_unit_payoff(entry_price, side, price) * f64::from(contracts),
    }
}

/// Payoff of a leg across the whole price grid
pub fn leg_payoff(leg: &Leg, prices: &[f64]) -> Vec<f64> {
    prices.iter().map(|&x| leg_payoff_at(leg, x)).collect()
}

/// Element-wise sum of leg payoff vectors.
///
/// All vectors must have length `len`.
pub fn aggregate<'a, I>(len: usize, legs: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut total = vec![0.0; len];
    for payoffs in legs {
        debug_assert_eq!(payoffs.len(), len);
        for (acc, y) in total.iter_mut().zip(payoffs) {
            *acc += y;
        }
    }
    total
}
