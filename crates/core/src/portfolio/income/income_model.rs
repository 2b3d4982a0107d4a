use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dividend contribution of a single position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeByPosition {
    pub symbol: String,
    pub name: Option<String>,
    pub annual_income: Decimal,
    /// Annual income over current market value, in percent.
    pub current_yield: Decimal,
    /// Annual income over cost basis, in percent.
    pub yield_on_cost: Decimal,
    /// Share of the portfolio's annual income, in percent.
    pub income_share: Decimal,
}

/// Projected dividend income for the whole portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummary {
    pub annual_income: Decimal,
    pub monthly_income: Decimal,
    pub dividend_yield: Decimal,
    pub yield_on_cost: Decimal,
    /// Positions that pay a dividend, largest income first.
    pub by_position: Vec<IncomeByPosition>,
}

impl IncomeSummary {
    pub fn empty() -> Self {
        IncomeSummary {
            annual_income: Decimal::ZERO,
            monthly_income: Decimal::ZERO,
            dividend_yield: Decimal::ZERO,
            yield_on_cost: Decimal::ZERO,
            by_position: Vec::new(),
        }
    }
}
