use rust_decimal::Decimal;

use crate::constants::MONTHS_PER_YEAR;
use crate::portfolio::summary::{total_cost, total_value};
use crate::positions::Position;
use crate::utils::decimal_utils::percent_of;

use super::{IncomeByPosition, IncomeSummary};

/// Sum of shares × annual dividend per share; positions without a dividend add zero.
pub fn annual_dividend_income(positions: &[Position]) -> Decimal {
    positions.iter().map(Position::annual_income).sum()
}

/// Annual income as a percent of market value; zero for a worthless portfolio.
pub fn dividend_yield(positions: &[Position]) -> Decimal {
    percent_of(annual_dividend_income(positions), total_value(positions))
}

/// Annual income as a percent of cost basis; zero when nothing was paid for.
pub fn yield_on_cost(positions: &[Position]) -> Decimal {
    percent_of(annual_dividend_income(positions), total_cost(positions))
}

/// Average monthly income from the annual projection.
pub fn monthly_income(positions: &[Position]) -> Decimal {
    annual_dividend_income(positions) / Decimal::from(MONTHS_PER_YEAR)
}

/// Income per dividend-paying position, largest first (stable on ties).
pub fn income_by_position(positions: &[Position]) -> Vec<IncomeByPosition> {
    let portfolio_income = annual_dividend_income(positions);

    let mut entries: Vec<IncomeByPosition> = positions
        .iter()
        .filter(|position| position.annual_income() > Decimal::ZERO)
        .map(|position| {
            let income = position.annual_income();
            IncomeByPosition {
                symbol: position.symbol.clone(),
                name: position.name.clone(),
                annual_income: income,
                current_yield: percent_of(income, position.total_value()),
                yield_on_cost: percent_of(income, position.total_cost()),
                income_share: percent_of(income, portfolio_income),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.annual_income.cmp(&a.annual_income));
    entries
}

pub fn income_summary(positions: &[Position]) -> IncomeSummary {
    if positions.is_empty() {
        return IncomeSummary::empty();
    }

    IncomeSummary {
        annual_income: annual_dividend_income(positions),
        monthly_income: monthly_income(positions),
        dividend_yield: dividend_yield(positions),
        yield_on_cost: yield_on_cost(positions),
        by_position: income_by_position(positions),
    }
}
