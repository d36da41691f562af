//! Splitter ADO endpoints: royalty allocation, unsigned transaction bodies
//! and chain state queries.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::server::AppState;
use crate::royalty::{allocate, format_percent, InvestorStake, RoyaltyAllocation};
use crate::splitter::messages::{
    self, ExecuteValue, InstantiateValue, Recipient, TxBody,
};
use crate::splitter::BalanceInfo;

#[derive(Deserialize)]
pub struct RoyaltiesRequest {
    /// Wallet that receives the fixed creator share.
    pub creator_address: String,
}

#[derive(Serialize)]
pub struct DisplayEntry {
    pub address: String,
    pub percent: String,
}

#[derive(Serialize)]
pub struct RoyaltiesResponse {
    pub idea_id: Uuid,
    pub allocation: RoyaltyAllocation,
    /// Recipient list in the exact shape the Splitter contract expects,
    /// creator first, one entry per recorded investment.
    pub recipients: Vec<Recipient>,
    /// Human-readable percentages for the UI.
    pub display: Vec<DisplayEntry>,
}

/// Compute the royalty split for one idea from its current investments.
///
/// The investment list is read in a single store call, so the allocation
/// reflects one consistent snapshot. Repeat purchases from the same wallet
/// stay separate recipient entries.
pub async fn royalties(
    State(state): State<AppState>,
    Path(idea_id): Path<Uuid>,
    Json(req): Json<RoyaltiesRequest>,
) -> ApiResult<Json<RoyaltiesResponse>> {
    if req.creator_address.trim().is_empty() {
        return Err(ApiError::validation_error(
            "creator_address",
            "must not be empty",
        ));
    }

    state
        .store
        .get_idea(idea_id)
        .await?
        .ok_or_else(|| ApiError::idea_not_found(&idea_id.to_string()))?;

    let investments = state.store.investments_for_idea(idea_id).await?;
    let stakes: Vec<InvestorStake> = investments
        .iter()
        .map(|inv| InvestorStake::new(inv.investor_address.clone(), inv.tokens_purchased))
        .collect();

    let allocation = allocate(&req.creator_address, state.config.creator_share, &stakes)?;
    let recipients = messages::recipients_from_allocation(&allocation);
    let display = allocation
        .entries()
        .map(|e| DisplayEntry {
            address: e.address.clone(),
            percent: format_percent(e.percent),
        })
        .collect();

    Ok(Json(RoyaltiesResponse {
        idea_id,
        allocation,
        recipients,
        display,
    }))
}

fn default_creator_split() -> String {
    "0.8".to_string()
}

fn default_treasury_split() -> String {
    "0.2".to_string()
}

fn default_send_amount() -> String {
    // 1 ANDR
    "1000000".to_string()
}

#[derive(Deserialize)]
pub struct InstantiateRequest {
    pub creator_address: String,
    pub treasury_address: String,
    #[serde(default = "default_creator_split")]
    pub creator_split: String,
    #[serde(default = "default_treasury_split")]
    pub treasury_split: String,
}

/// Unsigned MsgInstantiateContract deploying a creator/treasury Splitter.
pub async fn instantiate(
    State(state): State<AppState>,
    Json(req): Json<InstantiateRequest>,
) -> ApiResult<Json<TxBody<InstantiateValue>>> {
    let recipients = vec![
        Recipient::new(req.creator_address.clone(), req.creator_split),
        Recipient::new(req.treasury_address, req.treasury_split),
    ];

    let body = messages::instantiate_tx_body(
        &req.creator_address,
        recipients,
        &state.config.kernel_address,
        state.config.splitter_code_id,
    )?;
    Ok(Json(body))
}

#[derive(Deserialize)]
pub struct SendRequest {
    pub sender_address: String,
    pub splitter_address: String,
    #[serde(default = "default_send_amount")]
    pub amount: String,
}

/// Unsigned MsgExecuteContract sending funds into a deployed Splitter.
pub async fn send(Json(req): Json<SendRequest>) -> ApiResult<Json<TxBody<ExecuteValue>>> {
    let body = messages::send_tx_body(&req.sender_address, &req.splitter_address, &req.amount)?;
    Ok(Json(body))
}

#[derive(Deserialize)]
pub struct TxBodiesRequest {
    pub creator_address: String,
    pub treasury_address: String,
    pub splitter_address: String,
}

#[derive(Serialize)]
pub struct TxBodiesResponse {
    pub instantiate: TxBody<InstantiateValue>,
    pub send: TxBody<ExecuteValue>,
    pub query_config: serde_json::Value,
    pub addresses_to_check: Vec<String>,
}

/// Every transaction body the demo walkthrough needs, in one response.
pub async fn tx_bodies(
    State(state): State<AppState>,
    Json(req): Json<TxBodiesRequest>,
) -> ApiResult<Json<TxBodiesResponse>> {
    let recipients = vec![
        Recipient::new(req.creator_address.clone(), default_creator_split()),
        Recipient::new(req.treasury_address.clone(), default_treasury_split()),
    ];
    let instantiate = messages::instantiate_tx_body(
        &req.creator_address,
        recipients,
        &state.config.kernel_address,
        state.config.splitter_code_id,
    )?;
    let send = messages::send_tx_body(
        &req.creator_address,
        &req.splitter_address,
        &default_send_amount(),
    )?;

    Ok(Json(TxBodiesResponse {
        instantiate,
        send,
        query_config: serde_json::json!({ "get_splitter_config": {} }),
        addresses_to_check: vec![
            req.creator_address,
            req.treasury_address,
            req.splitter_address,
        ],
    }))
}

#[derive(Deserialize)]
pub struct QueryRequest {
    pub splitter_address: String,
    pub creator_address: String,
    pub treasury_address: String,
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub config: serde_json::Value,
    pub creator_balance: BalanceInfo,
    pub treasury_balance: BalanceInfo,
}

/// Query the deployed Splitter's config and both recipient balances. The
/// three requests run concurrently; one failure fails the whole response.
pub async fn query(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> ApiResult<Json<QueryResponse>> {
    let (config, creator_balance, treasury_balance) = tokio::try_join!(
        state.chain.splitter_config(&req.splitter_address),
        state.chain.balance(&req.creator_address),
        state.chain.balance(&req.treasury_address),
    )?;

    Ok(Json(QueryResponse {
        config,
        creator_balance,
        treasury_balance,
    }))
}
