//! Service that fetches positions from a provider and aggregates them.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};

use crate::errors::Result;
use crate::portfolio::allocation::{sector_allocation, SectorAllocationEntry};
use crate::portfolio::income::{income_summary, IncomeSummary};
use crate::portfolio::risk::{risk_metrics, RiskMetrics};
use crate::portfolio::summary::{summarize, PortfolioSummary};
use crate::positions::{validate_positions, Position, PositionProviderTrait};

/// Trait for portfolio aggregation over the provider's current positions.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Returns the validated position list.
    async fn get_positions(&self) -> Result<Vec<Position>>;

    async fn get_summary(&self) -> Result<PortfolioSummary>;

    async fn get_sector_allocation(&self) -> Result<Vec<SectorAllocationEntry>>;

    async fn get_risk_metrics(&self) -> Result<RiskMetrics>;

    async fn get_income_summary(&self) -> Result<IncomeSummary>;
}

pub struct PortfolioService {
    position_provider: Arc<dyn PositionProviderTrait>,
}

impl PortfolioService {
    pub fn new(position_provider: Arc<dyn PositionProviderTrait>) -> Self {
        Self { position_provider }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_positions(&self) -> Result<Vec<Position>> {
        let positions = match self.position_provider.get_positions().await {
            Ok(positions) => positions,
            Err(e) => {
                error!("Failed to load positions from provider: {}", e);
                return Err(e);
            }
        };
        validate_positions(&positions)?;
        debug!("Loaded {} positions", positions.len());
        Ok(positions)
    }

    async fn get_summary(&self) -> Result<PortfolioSummary> {
        let positions = self.get_positions().await?;
        Ok(summarize(&positions))
    }

    async fn get_sector_allocation(&self) -> Result<Vec<SectorAllocationEntry>> {
        let positions = self.get_positions().await?;
        Ok(sector_allocation(&positions))
    }

    async fn get_risk_metrics(&self) -> Result<RiskMetrics> {
        let positions = self.get_positions().await?;
        Ok(risk_metrics(&positions))
    }

    async fn get_income_summary(&self) -> Result<IncomeSummary> {
        let positions = self.get_positions().await?;
        Ok(income_summary(&positions))
    }
}
