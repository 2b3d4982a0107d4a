//! Goals domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a goal's target amount is measured against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalKind {
    /// Total market value of the portfolio
    #[default]
    PortfolioValue,
    /// Projected annual dividend income
    AnnualIncome,
}

/// Domain model representing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub kind: GoalKind,
    pub target_amount: Decimal,
}

/// Progress of a goal against the current positions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub title: String,
    pub kind: GoalKind,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    /// Amount still missing, never negative
    pub remaining_amount: Decimal,
    /// 0-100, capped once the target is reached
    pub percent_complete: Decimal,
    pub is_achieved: bool,
}
