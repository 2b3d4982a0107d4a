use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalKind, GoalProgress};
use crate::goals::goals_traits::GoalServiceTrait;
use crate::portfolio::{annual_dividend_income, total_value, PortfolioServiceTrait};
use crate::positions::Position;
use crate::utils::decimal_utils::percent_of;

/// Checks that a goal has a title and a non-negative target.
pub fn validate_goal(goal: &Goal) -> Result<()> {
    if goal.title.trim().is_empty() {
        return Err(ValidationError::MissingField("title".to_string()).into());
    }
    if goal.target_amount < Decimal::ZERO {
        return Err(ValidationError::InvalidInput(format!(
            "Goal '{}' has a negative target amount",
            goal.title
        ))
        .into());
    }
    Ok(())
}

/// Parses a JSON array of goals and validates each one.
pub fn parse_goals(json: &str) -> Result<Vec<Goal>> {
    let goals: Vec<Goal> = serde_json::from_str(json)?;
    for goal in &goals {
        validate_goal(goal)?;
    }
    Ok(goals)
}

/// Measures a goal against a position list.
///
/// A zero target is reported as 0% complete but achieved.
pub fn goal_progress(goal: &Goal, positions: &[Position]) -> GoalProgress {
    let current_amount = match goal.kind {
        GoalKind::PortfolioValue => total_value(positions),
        GoalKind::AnnualIncome => annual_dividend_income(positions),
    };
    let remaining_amount = (goal.target_amount - current_amount).max(Decimal::ZERO);
    let percent_complete = percent_of(current_amount, goal.target_amount).min(dec!(100));

    GoalProgress {
        goal_id: goal.id.clone(),
        title: goal.title.clone(),
        kind: goal.kind,
        target_amount: goal.target_amount,
        current_amount,
        remaining_amount,
        percent_complete,
        is_achieved: current_amount >= goal.target_amount,
    }
}

pub struct GoalService {
    portfolio_service: Arc<dyn PortfolioServiceTrait>,
}

impl GoalService {
    pub fn new(portfolio_service: Arc<dyn PortfolioServiceTrait>) -> Self {
        GoalService { portfolio_service }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn evaluate_goals(&self, goals: &[Goal]) -> Result<Vec<GoalProgress>> {
        for goal in goals {
            validate_goal(goal)?;
        }
        let positions = self.portfolio_service.get_positions().await?;
        debug!(
            "Evaluating {} goals against {} positions",
            goals.len(),
            positions.len()
        );
        Ok(goals
            .iter()
            .map(|goal| goal_progress(goal, &positions))
            .collect())
    }
}
