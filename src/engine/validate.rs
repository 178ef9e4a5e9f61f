//! Checks for the categorical fields of a leg.
//!
//! Each validator lower-cases its input, matches it against the legal set and
//! returns the typed value. Anything else, including abbreviations such as
//! `"s"` for short, is rejected with [`PayoffError::InvalidEnumeration`].

use super::error::{EngineResult, PayoffError};
use super::types::{Instrument, OptionType, Side, INSTRUMENTS, OPTION_TYPES, TRADE_DIRECTIONS};

pub fn validate_instrument(value: &str) -> EngineResult<Instrument> {
    match value.to_lowercase().as_str() {
        "option" => Ok(Instrument::Option),
        "underlying" => Ok(Instrument::Underlying),
        _ => Err(PayoffError::invalid_enumeration(
            "instrument",
            value,
            INSTRUMENTS,
        )),
    }
}

pub fn validate_option_type(value: &str) -> EngineResult<OptionType> {
    match value.to_lowercase().as_str() {
        "call" => Ok(OptionType::Call),
        "put" => Ok(OptionType::Put),
        _ => Err(PayoffError::invalid_enumeration(
            "option_type",
            value,
            OPTION_TYPES,
        )),
    }
}

pub fn validate_trade_direction(value: &str) -> EngineResult<Side> {
    match value.to_lowercase().as_str() {
        "long" => Ok(Side::Long),
        "short" => Ok(Side::Short),
        _ => Err(PayoffError::invalid_enumeration(
            "trade",
            value,
            TRADE_DIRECTIONS,
        )),
    }
}
