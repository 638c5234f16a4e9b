//! Shared value types: market inputs, Greeks, and the error taxonomy.

mod error;
mod greeks;
mod market;

pub use error::{ConfigError, DomainError};
pub use greeks::GreeksResult;
pub use market::{MarketInputs, OptionType};
