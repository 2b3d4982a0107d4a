//! Positions module - the holding record, its validation, and the provider seam.

mod in_memory_provider;
mod positions_model;
mod positions_traits;

#[cfg(test)]
mod positions_model_tests;

pub use in_memory_provider::InMemoryPositionProvider;
pub use positions_model::{parse_positions, validate_positions, Position, PositionPerformance};
pub use positions_traits::PositionProviderTrait;
