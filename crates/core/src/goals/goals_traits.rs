use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalProgress};
use async_trait::async_trait;

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    /// Evaluates each goal against the provider's current positions,
    /// preserving the order of `goals`.
    async fn evaluate_goals(&self, goals: &[Goal]) -> Result<Vec<GoalProgress>>;
}
