use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use divfolio_core::positions::{parse_positions, Position};
use serde::Serialize;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReplacePositionsResponse {
    position_count: usize,
}

async fn get_positions(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Position>>> {
    let positions = state.portfolio_service.get_positions().await?;
    Ok(Json(positions))
}

/// Replaces the stored positions. The raw body goes through the core parser
/// so shape errors come back as descriptive validation messages.
async fn replace_positions(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<Json<ReplacePositionsResponse>> {
    let positions = parse_positions(&body)?;
    let position_count = state.position_store.replace_positions(positions)?;
    tracing::info!("Stored {} positions", position_count);
    Ok(Json(ReplacePositionsResponse { position_count }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/positions", get(get_positions).put(replace_positions))
}
