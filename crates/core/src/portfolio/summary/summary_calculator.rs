use log::debug;
use rust_decimal::Decimal;

use crate::constants::RANKED_LIST_SIZE;
use crate::portfolio::income::{annual_dividend_income, dividend_yield};
use crate::positions::{Position, PositionPerformance};
use crate::utils::decimal_utils::percent_of;

use super::{DayChange, GainLoss, PortfolioSummary};

/// Sum of shares × current price. Zero for an empty list.
pub fn total_value(positions: &[Position]) -> Decimal {
    positions.iter().map(Position::total_value).sum()
}

/// Sum of shares × average cost. Zero for an empty list.
pub fn total_cost(positions: &[Position]) -> Decimal {
    positions.iter().map(Position::total_cost).sum()
}

/// Portfolio gain/loss; the percent is zero when the cost basis is zero.
pub fn gain_loss(positions: &[Position]) -> GainLoss {
    let value = total_value(positions);
    let cost = total_cost(positions);
    let absolute = value - cost;
    GainLoss {
        absolute,
        percent: percent_of(absolute, cost),
    }
}

/// Change against the previous close, or `None` when no position has one.
///
/// Positions without a previous close are left out of both the change and
/// the base it is measured against.
pub fn day_change(positions: &[Position]) -> Option<DayChange> {
    let mut previous_value = Decimal::ZERO;
    let mut current_value = Decimal::ZERO;
    let mut covered = 0usize;

    for position in positions {
        if let Some(previous_close) = position.previous_close {
            previous_value += position.shares * previous_close;
            current_value += position.total_value();
            covered += 1;
        }
    }

    if covered == 0 {
        return None;
    }

    let absolute = current_value - previous_value;
    Some(DayChange {
        absolute,
        percent: percent_of(absolute, previous_value),
        positions_covered: covered,
    })
}

/// Positions ordered by gain/loss percent, highest first.
///
/// The sort is stable, so equal percents keep their input order.
pub fn rank_by_performance(positions: &[Position]) -> Vec<PositionPerformance> {
    let mut ranked: Vec<PositionPerformance> =
        positions.iter().map(PositionPerformance::from).collect();
    ranked.sort_by(|a, b| b.gain_loss_percent.cmp(&a.gain_loss_percent));
    ranked
}

/// Splits a ranking into the best and worst `RANKED_LIST_SIZE` entries.
///
/// Both lists stay in descending order, so the worst list starts with its
/// least-bad entry. Short rankings yield overlapping lists.
fn split_performers(
    ranked: &[PositionPerformance],
) -> (Vec<PositionPerformance>, Vec<PositionPerformance>) {
    let top = ranked.iter().take(RANKED_LIST_SIZE).cloned().collect();
    let worst_start = ranked.len().saturating_sub(RANKED_LIST_SIZE);
    let worst = ranked[worst_start..].to_vec();
    (top, worst)
}

/// Composes every portfolio statistic into one summary.
pub fn summarize(positions: &[Position]) -> PortfolioSummary {
    let value = total_value(positions);
    let cost = total_cost(positions);
    let absolute = value - cost;

    let ranked = rank_by_performance(positions);
    let (top_performers, worst_performers) = split_performers(&ranked);

    debug!(
        "Summarized {} positions: value={}, cost={}",
        positions.len(),
        value,
        cost
    );

    PortfolioSummary {
        total_value: value,
        total_cost: cost,
        gain_loss: GainLoss {
            absolute,
            percent: percent_of(absolute, cost),
        },
        annual_dividend_income: annual_dividend_income(positions),
        dividend_yield: dividend_yield(positions),
        position_count: positions.len(),
        day_change: day_change(positions),
        top_performers,
        worst_performers,
    }
}
