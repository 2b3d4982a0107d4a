use std::sync::RwLock;

use async_trait::async_trait;
use log::debug;

use crate::errors::{Error, Result};
use crate::positions::{validate_positions, Position, PositionProviderTrait};

/// Process-local position list, replaced wholesale by the caller.
///
/// Stands in for a brokerage sync when the positions are pushed by a client.
#[derive(Debug, Default)]
pub struct InMemoryPositionProvider {
    positions: RwLock<Vec<Position>>,
}

impl InMemoryPositionProvider {
    pub fn new(positions: Vec<Position>) -> Result<Self> {
        validate_positions(&positions)?;
        Ok(Self {
            positions: RwLock::new(positions),
        })
    }

    /// Replaces the stored positions after validating the new list.
    /// On error the previous list is kept.
    pub fn replace_positions(&self, positions: Vec<Position>) -> Result<usize> {
        validate_positions(&positions)?;
        let count = positions.len();
        let mut guard = self
            .positions
            .write()
            .map_err(|e| Error::Repository(format!("position store poisoned: {}", e)))?;
        *guard = positions;
        debug!("Replaced stored positions ({} entries)", count);
        Ok(count)
    }
}

#[async_trait]
impl PositionProviderTrait for InMemoryPositionProvider {
    async fn get_positions(&self) -> Result<Vec<Position>> {
        let guard = self
            .positions
            .read()
            .map_err(|e| Error::Repository(format!("position store poisoned: {}", e)))?;
        Ok(guard.clone())
    }
}
