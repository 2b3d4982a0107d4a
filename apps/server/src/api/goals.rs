use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use divfolio_core::goals::{parse_goals, GoalProgress};

use crate::{error::ApiResult, main_lib::AppState};

async fn evaluate_goals(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<Json<Vec<GoalProgress>>> {
    let goals = parse_goals(&body)?;
    let progress = state.goal_service.evaluate_goals(&goals).await?;
    Ok(Json(progress))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/goals/progress", post(evaluate_goals))
}
