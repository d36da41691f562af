//! Token purchases and investor portfolios.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::models::Investment;

#[derive(Deserialize)]
pub struct InvestRequest {
    pub wallet_address: String,
    pub tokens: u64,
}

#[derive(Serialize)]
pub struct InvestResponse {
    pub success: bool,
    pub transaction_hash: String,
    pub tokens_purchased: u64,
    pub total_cost: f64,
    pub tokens_remaining: u64,
}

#[derive(Serialize)]
pub struct PortfolioEntry {
    pub investment: Investment,
    pub idea_title: String,
    /// Tokens held valued at the idea's current per-token price.
    pub current_value: f64,
}

#[derive(Serialize)]
pub struct PortfolioResponse {
    pub wallet_address: String,
    pub investments: Vec<PortfolioEntry>,
    pub total_value: f64,
}

/// Buy fractional tokens of an idea. The cost is locked to the idea's
/// per-token price at the moment of purchase; the store enforces the
/// supply cap atomically.
pub async fn invest(
    State(state): State<AppState>,
    Path(idea_id): Path<Uuid>,
    Json(req): Json<InvestRequest>,
) -> ApiResult<Json<InvestResponse>> {
    if req.wallet_address.trim().is_empty() {
        return Err(ApiError::validation_error(
            "wallet_address",
            "must not be empty",
        ));
    }
    if req.tokens == 0 {
        return Err(ApiError::validation_error("tokens", "must be positive"));
    }

    let idea = state
        .store
        .get_idea(idea_id)
        .await?
        .ok_or_else(|| ApiError::idea_not_found(&idea_id.to_string()))?;

    let total_cost = req.tokens as f64 * idea.token_price;
    let now = Utc::now();

    let investment = Investment {
        id: Uuid::new_v4(),
        investor_address: req.wallet_address,
        idea_id,
        tokens_purchased: req.tokens,
        amount_paid: total_cost,
        transaction_hash: format!("TX-{}", now.format("%Y%m%d%H%M%S%f")),
        created_at: now,
    };

    let tx_hash = investment.transaction_hash.clone();
    let updated = state.store.record_investment(investment).await?;

    log::info!(
        "investment recorded on idea {}: {} tokens for {:.2} ({})",
        idea_id,
        req.tokens,
        total_cost,
        tx_hash
    );

    Ok(Json(InvestResponse {
        success: true,
        transaction_hash: tx_hash,
        tokens_purchased: req.tokens,
        total_cost,
        tokens_remaining: updated.tokens_available(),
    }))
}

/// Every investment made from one wallet, valued at current prices.
pub async fn portfolio(
    State(state): State<AppState>,
    Path(wallet_address): Path<String>,
) -> ApiResult<Json<PortfolioResponse>> {
    let investments = state.store.investments_for_address(&wallet_address).await?;

    let mut entries = Vec::with_capacity(investments.len());
    let mut total_value = 0.0;
    for investment in investments {
        let idea = state
            .store
            .get_idea(investment.idea_id)
            .await?
            .ok_or_else(|| ApiError::idea_not_found(&investment.idea_id.to_string()))?;

        let current_value = investment.tokens_purchased as f64 * idea.token_price;
        total_value += current_value;
        entries.push(PortfolioEntry {
            investment,
            idea_title: idea.title,
            current_value,
        });
    }

    Ok(Json(PortfolioResponse {
        wallet_address,
        investments: entries,
        total_value,
    }))
}
