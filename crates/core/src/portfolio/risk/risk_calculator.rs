use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::FULL_DIVERSIFICATION_POSITIONS;
use crate::portfolio::allocation::largest_sector_percent;
use crate::portfolio::summary::total_value;
use crate::positions::Position;
use crate::utils::decimal_utils::percent_of;

use super::RiskMetrics;

/// Linear ramp on the holdings count, capped at 100.
pub fn diversification_score(position_count: usize) -> Decimal {
    let ratio = Decimal::from(position_count) / Decimal::from(FULL_DIVERSIFICATION_POSITIONS);
    ratio.min(Decimal::ONE) * dec!(100)
}

/// Percent of portfolio value held by the largest single position.
pub fn concentration_risk(positions: &[Position]) -> Decimal {
    let largest = positions
        .iter()
        .map(Position::total_value)
        .max()
        .unwrap_or(Decimal::ZERO);
    percent_of(largest, total_value(positions))
}

pub fn risk_metrics(positions: &[Position]) -> RiskMetrics {
    RiskMetrics {
        diversification_score: diversification_score(positions.len()),
        concentration_risk: concentration_risk(positions),
        sector_concentration: largest_sector_percent(positions),
    }
}
