pub mod ai_format;
pub mod payoff;
pub mod response_types;
pub mod strategies;
