pub mod core;
pub mod error;
pub mod grid;
pub mod payoff;
pub mod summary;
pub mod types;
pub mod validate;
