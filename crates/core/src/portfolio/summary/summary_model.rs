use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::positions::PositionPerformance;

/// Gain or loss against cost basis.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GainLoss {
    pub absolute: Decimal,
    /// Percent of cost basis; zero when the cost basis is zero.
    pub percent: Decimal,
}

/// Change since the previous close, over positions that report one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DayChange {
    pub absolute: Decimal,
    pub percent: Decimal,
    /// Number of positions that contributed a previous close.
    pub positions_covered: usize,
}

/// Snapshot of a position list at the moment it was computed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub gain_loss: GainLoss,
    pub annual_dividend_income: Decimal,
    pub dividend_yield: Decimal,
    pub position_count: usize,
    /// `None` when no position carries a previous close.
    pub day_change: Option<DayChange>,
    pub top_performers: Vec<PositionPerformance>,
    pub worst_performers: Vec<PositionPerformance>,
}

impl PortfolioSummary {
    /// Copy with money and percent fields rounded for display.
    pub fn rounded(&self) -> Self {
        let round = |value: Decimal| value.round_dp(DISPLAY_DECIMAL_PRECISION);
        let round_performance = |p: &PositionPerformance| PositionPerformance {
            total_value: round(p.total_value),
            total_cost: round(p.total_cost),
            gain_loss: round(p.gain_loss),
            gain_loss_percent: round(p.gain_loss_percent),
            ..p.clone()
        };

        PortfolioSummary {
            total_value: round(self.total_value),
            total_cost: round(self.total_cost),
            gain_loss: GainLoss {
                absolute: round(self.gain_loss.absolute),
                percent: round(self.gain_loss.percent),
            },
            annual_dividend_income: round(self.annual_dividend_income),
            dividend_yield: round(self.dividend_yield),
            position_count: self.position_count,
            day_change: self.day_change.map(|change| DayChange {
                absolute: round(change.absolute),
                percent: round(change.percent),
                positions_covered: change.positions_covered,
            }),
            top_performers: self.top_performers.iter().map(round_performance).collect(),
            worst_performers: self.worst_performers.iter().map(round_performance).collect(),
        }
    }
}
