//! Goals module - domain models, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod goals_service_tests;

pub use goals_model::{Goal, GoalKind, GoalProgress};
pub use goals_service::{goal_progress, parse_goals, validate_goal, GoalService};
pub use goals_traits::GoalServiceTrait;
