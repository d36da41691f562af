//! Marketplace records: ideas, investments and investor profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a listed idea. Ideas are never deleted; retiring one
/// is a transition to `Archived`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    Active,
    Archived,
}

/// A tokenized piece of intellectual property.
///
/// Token supply is fixed at issuance. `tokens_sold` only ever grows, and the
/// store guarantees it never exceeds `total_tokens`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub field: String,
    pub inventor: String,
    /// Fabricated valuation in USD, always positive.
    pub predicted_value: f64,
    pub total_tokens: u64,
    pub tokens_sold: u64,
    pub token_price: f64,
    /// Identifier of the NFT minted for this idea, `IP-<timestamp>`.
    pub nft_id: String,
    pub status: IdeaStatus,
    pub created_at: DateTime<Utc>,
}

impl Idea {
    pub fn tokens_available(&self) -> u64 {
        self.total_tokens.saturating_sub(self.tokens_sold)
    }

    pub fn is_active(&self) -> bool {
        self.status == IdeaStatus::Active
    }
}

/// A purchase of fractional tokens. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    pub id: Uuid,
    pub investor_address: String,
    pub idea_id: Uuid,
    pub tokens_purchased: u64,
    /// tokens_purchased x token_price at the time of purchase.
    pub amount_paid: f64,
    pub transaction_hash: String,
    pub created_at: DateTime<Utc>,
}

/// A registered investor wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub id: Uuid,
    pub name: String,
    pub wallet_address: String,
    pub risk_preference: RiskPreference,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskPreference {
    Conservative,
    Moderate,
    Aggressive,
}

impl Default for RiskPreference {
    fn default() -> Self {
        RiskPreference::Moderate
    }
}
