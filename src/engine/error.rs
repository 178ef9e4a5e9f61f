//! Error types for payoff computation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayoffError {
    #[error("Invalid {field} '{value}': expected one of {}", expected.join(", "))]
    InvalidEnumeration {
        field: &'static str,
        value: String,
        expected: &'static [&'static str],
    },

    #[error("Leg {leg}: missing required field '{field}'")]
    MissingField { leg: usize, field: &'static str },

    #[error("Leg {leg}: {reason}")]
    InvalidLeg { leg: usize, reason: String },

    #[error("Invalid {name} ({value}): {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Strategy has no legs")]
    EmptyStrategy,
}

pub type EngineResult<T> = Result<T, PayoffError>;

impl PayoffError {
    pub fn invalid_enumeration(
        field: &'static str,
        value: impl Into<String>,
        expected: &'static [&'static str],
    ) -> Self {
        Self::InvalidEnumeration {
            field,
            value: value.into(),
            expected,
        }
    }

    pub fn missing_field(leg: usize, field: &'static str) -> Self {
        Self::MissingField { leg, field }
    }

    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_enumeration_lists_expected_values() {
        let err = PayoffError::invalid_enumeration("trade", "buy", &["long", "short"]);
        assert_eq!(
            err.to_string(),
            "Invalid trade 'buy': expected one of long, short"
        );
    }

    #[test]
    fn missing_field_names_leg_and_field() {
        let err = PayoffError::missing_field(2, "strike");
        assert_eq!(err.to_string(), "Leg 2: missing required field 'strike'");
    }
}
