//! Allocation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio value held in one sector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectorAllocationEntry {
    /// Sector label, "Unknown" for positions without one
    pub sector: String,
    /// Market value of the sector's positions
    pub value: Decimal,
    /// Percentage of total portfolio value (0-100)
    pub percent: Decimal,
    /// Number of positions in the sector
    pub position_count: usize,
}
