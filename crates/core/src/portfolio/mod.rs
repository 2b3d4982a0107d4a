//! Portfolio aggregation.
//!
//! The calculators in the submodules are pure functions over a slice of
//! positions: no state, no I/O, and every division by zero yields zero.
//! `PortfolioService` wires them to a position provider.

pub mod allocation;
pub mod income;
pub mod portfolio_service;
pub mod risk;
pub mod summary;


pub use allocation::{sector_allocation, SectorAllocationEntry};
pub use income::{annual_dividend_income, dividend_yield, IncomeByPosition, IncomeSummary};
pub use portfolio_service::{PortfolioService, PortfolioServiceTrait};
pub use risk::{risk_metrics, RiskMetrics};
pub use summary::{
    gain_loss, summarize, total_cost, total_value, DayChange, GainLoss, PortfolioSummary,
};
