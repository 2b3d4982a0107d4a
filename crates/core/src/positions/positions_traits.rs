use async_trait::async_trait;

use crate::errors::Result;
use crate::positions::Position;

/// Supplies the current position list.
///
/// Implemented by brokerage sync and market-data collaborators outside this
/// crate; the portfolio service only reads from it.
#[async_trait]
pub trait PositionProviderTrait: Send + Sync {
    async fn get_positions(&self) -> Result<Vec<Position>>;
}
