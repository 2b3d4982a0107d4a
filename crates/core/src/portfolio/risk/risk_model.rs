use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Count-and-weight heuristics only: no volatility, beta or correlation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    /// 0-100, reaching 100 at the full diversification holdings count
    pub diversification_score: Decimal,
    /// Percent of value in the single largest position
    pub concentration_risk: Decimal,
    /// Percent of value in the largest sector
    pub sector_concentration: Decimal,
}
