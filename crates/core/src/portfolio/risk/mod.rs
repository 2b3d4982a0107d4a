//! Simple portfolio risk heuristics.

mod risk_calculator;
mod risk_model;

pub use risk_calculator::*;
pub use risk_model::RiskMetrics;
