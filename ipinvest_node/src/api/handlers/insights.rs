//! Recommendation feed and marketplace analytics.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::ai_services::Recommendation;
use crate::api::errors::ApiResult;
use crate::api::server::AppState;

#[derive(Serialize)]
pub struct AnalyticsResponse {
    pub total_ideas: u64,
    pub total_investments: u64,
    pub total_value: f64,
    pub avg_investment: f64,
}

/// Scored active ideas. Scores come from the demo recommender stub.
pub async fn recommendations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Recommendation>>> {
    let ideas = state.store.list_active_ideas().await?;
    Ok(Json(state.recommender.recommend(&ideas)))
}

/// Aggregate marketplace totals.
pub async fn analytics(State(state): State<AppState>) -> ApiResult<Json<AnalyticsResponse>> {
    let stats = state.store.stats().await?;
    Ok(Json(AnalyticsResponse {
        total_ideas: stats.total_ideas,
        total_investments: stats.total_investments,
        total_value: stats.total_value,
        avg_investment: stats.total_value / stats.total_investments.max(1) as f64,
    }))
}
