//! Divfolio Core - position aggregation for dividend portfolios.
//!
//! Turns a list of brokerage positions into summary statistics: value,
//! cost basis, gain/loss, dividend income and yield, sector allocation and
//! simple risk scores. Positions come from a `PositionProviderTrait`
//! implementation supplied by the caller.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod portfolio;
pub mod positions;
pub mod utils;

pub use portfolio::*;
pub use positions::{Position, PositionPerformance};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
