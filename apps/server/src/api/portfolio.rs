use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use divfolio_core::portfolio::{IncomeSummary, PortfolioSummary, RiskMetrics, SectorAllocationEntry};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize, Default)]
struct SummaryQuery {
    #[serde(default)]
    rounded: bool,
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state.portfolio_service.get_summary().await?;
    if query.rounded {
        return Ok(Json(summary.rounded()));
    }
    Ok(Json(summary))
}

async fn get_sector_allocation(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<SectorAllocationEntry>>> {
    let allocation = state.portfolio_service.get_sector_allocation().await?;
    Ok(Json(allocation))
}

async fn get_risk_metrics(State(state): State<Arc<AppState>>) -> ApiResult<Json<RiskMetrics>> {
    let metrics = state.portfolio_service.get_risk_metrics().await?;
    Ok(Json(metrics))
}

async fn get_income_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<IncomeSummary>> {
    let income = state.portfolio_service.get_income_summary().await?;
    Ok(Json(income))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/summary", get(get_summary))
        .route("/portfolio/allocations/sectors", get(get_sector_allocation))
        .route("/portfolio/risk", get(get_risk_metrics))
        .route("/portfolio/income", get(get_income_summary))
}
