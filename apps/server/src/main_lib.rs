use std::sync::Arc;

use anyhow::Context;
use divfolio_core::{
    goals::{GoalService, GoalServiceTrait},
    portfolio::{PortfolioService, PortfolioServiceTrait},
    positions::{parse_positions, InMemoryPositionProvider, Position},
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    /// Positions pushed by clients; the portfolio service reads from it.
    pub position_store: Arc<InMemoryPositionProvider>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let log_format = std::env::var("DF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

async fn load_initial_positions(config: &Config) -> anyhow::Result<Vec<Position>> {
    let Some(path) = &config.positions_file else {
        return Ok(Vec::new());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read positions file {}", path.display()))?;
    let positions = parse_positions(&raw)
        .with_context(|| format!("Invalid positions file {}", path.display()))?;
    tracing::info!(
        "Loaded {} positions from {}",
        positions.len(),
        path.display()
    );
    Ok(positions)
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let initial_positions = load_initial_positions(config).await?;
    let position_store = Arc::new(InMemoryPositionProvider::new(initial_positions)?);

    let portfolio_service = Arc::new(PortfolioService::new(position_store.clone()));
    let goal_service = Arc::new(GoalService::new(portfolio_service.clone()));

    Ok(Arc::new(AppState {
        position_store,
        portfolio_service,
        goal_service,
    }))
}
