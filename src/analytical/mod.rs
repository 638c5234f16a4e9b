//! Closed-form pricing and analytical Greeks.

pub mod distributions;

mod black_scholes;

pub use black_scholes::BlackScholes;
