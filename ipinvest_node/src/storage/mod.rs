//! Persistence interface for marketplace records.
//!
//! The API layer only talks to the [`MarketStore`] trait; the in-memory
//! implementation in [`memory`] backs the demo deployment.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Idea, Investment, InvestorProfile};

pub mod memory;

pub use memory::MemoryStore;

// Storage-specific Result type
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("oversell: requested {requested} tokens, {available} available")]
    Oversell { requested: u64, available: u64 },
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Aggregate marketplace counters for the analytics endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketStats {
    pub total_ideas: u64,
    pub total_investments: u64,
    pub total_value: f64,
}

/// Query/update interface over ideas, investments and investor profiles.
///
/// `investments_for_idea` returns one consistent snapshot in insertion
/// order; the royalty allocator depends on both properties.
#[async_trait]
pub trait MarketStore: Send + Sync {
    async fn put_idea(&self, idea: Idea) -> Result<()>;

    async fn get_idea(&self, id: Uuid) -> Result<Option<Idea>>;

    /// Active ideas, newest first.
    async fn list_active_ideas(&self) -> Result<Vec<Idea>>;

    /// Record an investment and accumulate the idea's `tokens_sold` in one
    /// atomic step. Fails with [`StoreError::Oversell`] if the purchase
    /// would push `tokens_sold` past `total_tokens`. Returns the updated
    /// idea.
    async fn record_investment(&self, investment: Investment) -> Result<Idea>;

    async fn investments_for_idea(&self, idea_id: Uuid) -> Result<Vec<Investment>>;

    async fn investments_for_address(&self, address: &str) -> Result<Vec<Investment>>;

    async fn upsert_profile(&self, profile: InvestorProfile) -> Result<()>;

    async fn get_profile(&self, wallet_address: &str) -> Result<Option<InvestorProfile>>;

    async fn stats(&self) -> Result<MarketStats>;

    async fn is_empty(&self) -> Result<bool>;
}
