//! REST queries against the Andromeda chain.
//!
//! Each query is an independently awaitable async fn; callers compose them
//! with their own runtime (`tokio::try_join!` in the API layer). No retries:
//! a failed query surfaces as an error response.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("chain request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chain response malformed: {0}")]
    Malformed(String),
    #[error("query encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// uandr balance of one address, raw and human readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceInfo {
    pub address: String,
    pub andr_balance: String,
    pub andr_balance_formatted: String,
}

#[derive(Debug, Deserialize)]
struct BalancesResponse {
    #[serde(default)]
    balances: Vec<CoinBalance>,
}

#[derive(Debug, Deserialize)]
struct CoinBalance {
    denom: String,
    amount: String,
}

/// Unauthenticated read-only client for a chain REST endpoint.
pub struct ChainClient {
    http: reqwest::Client,
    rest_url: String,
}

impl ChainClient {
    pub fn new(config: &Config) -> Self {
        Self::with_rest_url(config.chain_rest_url.clone())
    }

    pub fn with_rest_url(rest_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            rest_url,
        }
    }

    /// Smart-query a deployed Splitter for its configuration
    /// (`{"get_splitter_config": {}}`). Returns the raw JSON the contract
    /// reports; the caller relays it unchanged.
    pub async fn splitter_config(
        &self,
        contract_address: &str,
    ) -> Result<serde_json::Value, ChainError> {
        let query = serde_json::to_string(&serde_json::json!({ "get_splitter_config": {} }))?;
        let url = format!(
            "{}/cosmwasm/wasm/v1/contract/{}/smart/{}",
            self.rest_url, contract_address, query
        );

        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Query the bank module for an address and pull out its uandr balance.
    /// Unknown addresses report zero, matching the chain's own behavior.
    pub async fn balance(&self, address: &str) -> Result<BalanceInfo, ChainError> {
        let url = format!("{}/cosmos/bank/v1beta1/balances/{}", self.rest_url, address);
        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body: BalancesResponse = response.json().await?;

        let raw = body
            .balances
            .iter()
            .find(|c| c.denom == "uandr")
            .map(|c| c.amount.clone())
            .unwrap_or_else(|| "0".to_string());

        let micro: u128 = raw
            .parse()
            .map_err(|_| ChainError::Malformed(format!("non-numeric amount: {raw}")))?;

        Ok(BalanceInfo {
            address: address.to_string(),
            andr_balance_formatted: format_andr(micro),
            andr_balance: raw,
        })
    }
}

/// 1 ANDR = 1_000_000 uandr.
fn format_andr(micro: u128) -> String {
    format!("{}.{:06} ANDR", micro / 1_000_000, micro % 1_000_000)
}
