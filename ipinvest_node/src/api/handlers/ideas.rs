//! Idea listing and submission.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::models::{Idea, IdeaStatus, Investment};

#[derive(Serialize)]
pub struct IdeaDetailResponse {
    pub idea: Idea,
    pub investments: Vec<Investment>,
}

#[derive(Deserialize)]
pub struct SubmitIdeaRequest {
    pub title: String,
    pub description: String,
    pub field: String,
    pub inventor: String,
}

/// Active ideas, newest first.
pub async fn list_ideas(State(state): State<AppState>) -> ApiResult<Json<Vec<Idea>>> {
    let ideas = state.store.list_active_ideas().await?;
    Ok(Json(ideas))
}

/// One idea plus its investment history.
pub async fn get_idea(
    State(state): State<AppState>,
    Path(idea_id): Path<Uuid>,
) -> ApiResult<Json<IdeaDetailResponse>> {
    let idea = state
        .store
        .get_idea(idea_id)
        .await?
        .ok_or_else(|| ApiError::idea_not_found(&idea_id.to_string()))?;
    let investments = state.store.investments_for_idea(idea_id).await?;

    Ok(Json(IdeaDetailResponse { idea, investments }))
}

/// Submit a new idea. Valuation is fabricated by the demo appraiser; the
/// fixed token supply and the derived per-token price come from config.
pub async fn submit_idea(
    State(state): State<AppState>,
    Json(req): Json<SubmitIdeaRequest>,
) -> ApiResult<Json<Idea>> {
    for (field, value) in [
        ("title", &req.title),
        ("description", &req.description),
        ("field", &req.field),
        ("inventor", &req.inventor),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::validation_error(field, "must not be empty"));
        }
    }

    let predicted_value = state.valuation.appraise(&req.description, &req.field);
    let total_tokens = state.config.total_tokens_per_idea;
    let now = Utc::now();

    let idea = Idea {
        id: Uuid::new_v4(),
        title: req.title,
        description: req.description,
        field: req.field,
        inventor: req.inventor,
        predicted_value,
        total_tokens,
        tokens_sold: 0,
        token_price: predicted_value / total_tokens as f64,
        nft_id: format!("IP-{}", now.format("%Y%m%d%H%M%S")),
        status: IdeaStatus::Active,
        created_at: now,
    };

    state.store.put_idea(idea.clone()).await?;
    log::info!(
        "idea {} listed: \"{}\" appraised at {:.0}, {} tokens",
        idea.id,
        idea.title,
        idea.predicted_value,
        idea.total_tokens
    );

    Ok(Json(idea))
}
