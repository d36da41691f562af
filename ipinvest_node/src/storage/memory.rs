//! In-memory store backing the demo deployment.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::{MarketStats, MarketStore, Result, StoreError};
use crate::models::{Idea, IdeaStatus, Investment, InvestorProfile, RiskPreference};

#[derive(Default)]
struct Inner {
    ideas: HashMap<Uuid, Idea>,
    /// Insertion-ordered log; per-idea and per-address views filter it.
    investments: Vec<Investment>,
    profiles: HashMap<String, InvestorProfile>,
}

/// Simple in-memory [`MarketStore`] implementation. A single mutex makes
/// `record_investment` atomic with respect to the oversell check.
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Lock poisoning only happens if a writer panicked; the maps are
        // still structurally sound, so keep serving.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl MarketStore for MemoryStore {
    async fn put_idea(&self, idea: Idea) -> Result<()> {
        let mut inner = self.lock();
        inner.ideas.insert(idea.id, idea);
        Ok(())
    }

    async fn get_idea(&self, id: Uuid) -> Result<Option<Idea>> {
        let inner = self.lock();
        Ok(inner.ideas.get(&id).cloned())
    }

    async fn list_active_ideas(&self) -> Result<Vec<Idea>> {
        let inner = self.lock();
        let mut ideas: Vec<Idea> = inner
            .ideas
            .values()
            .filter(|i| i.is_active())
            .cloned()
            .collect();
        ideas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(ideas)
    }

    async fn record_investment(&self, investment: Investment) -> Result<Idea> {
        let mut inner = self.lock();
        let idea = inner
            .ideas
            .get_mut(&investment.idea_id)
            .ok_or_else(|| StoreError::NotFound(format!("idea {}", investment.idea_id)))?;

        let available = idea.total_tokens.saturating_sub(idea.tokens_sold);
        if investment.tokens_purchased > available {
            return Err(StoreError::Oversell {
                requested: investment.tokens_purchased,
                available,
            });
        }

        idea.tokens_sold += investment.tokens_purchased;
        let updated = idea.clone();
        inner.investments.push(investment);
        Ok(updated)
    }

    async fn investments_for_idea(&self, idea_id: Uuid) -> Result<Vec<Investment>> {
        let inner = self.lock();
        Ok(inner
            .investments
            .iter()
            .filter(|inv| inv.idea_id == idea_id)
            .cloned()
            .collect())
    }

    async fn investments_for_address(&self, address: &str) -> Result<Vec<Investment>> {
        let inner = self.lock();
        Ok(inner
            .investments
            .iter()
            .filter(|inv| inv.investor_address == address)
            .cloned()
            .collect())
    }

    async fn upsert_profile(&self, profile: InvestorProfile) -> Result<()> {
        let mut inner = self.lock();
        inner
            .profiles
            .insert(profile.wallet_address.clone(), profile);
        Ok(())
    }

    async fn get_profile(&self, wallet_address: &str) -> Result<Option<InvestorProfile>> {
        let inner = self.lock();
        Ok(inner.profiles.get(wallet_address).cloned())
    }

    async fn stats(&self) -> Result<MarketStats> {
        let inner = self.lock();
        Ok(MarketStats {
            total_ideas: inner.ideas.len() as u64,
            total_investments: inner.investments.len() as u64,
            total_value: inner.investments.iter().map(|inv| inv.amount_paid).sum(),
        })
    }

    async fn is_empty(&self) -> Result<bool> {
        let inner = self.lock();
        Ok(inner.ideas.is_empty())
    }
}

/// Demo catalogue loaded on first start so the marketplace is browsable
/// without submitting anything.
pub async fn seed_demo_data(store: &dyn MarketStore) -> Result<()> {
    if !store.is_empty().await? {
        return Ok(());
    }

    let samples = [
        (
            "Quantum Computing Patent",
            "Revolutionary quantum algorithm for cryptography",
            "Quantum Computing",
            "Dr. Alice Chen",
            2_500_000.0,
        ),
        (
            "AI-Powered Medical Diagnosis",
            "Machine learning system for early disease detection",
            "Healthcare AI",
            "Dr. Bob Johnson",
            1_800_000.0,
        ),
        (
            "Sustainable Energy Storage",
            "Next-generation battery technology for renewable energy",
            "Clean Energy",
            "Dr. Sarah Williams",
            3_200_000.0,
        ),
        (
            "Blockchain Supply Chain",
            "Transparent and secure supply chain management system",
            "Blockchain",
            "Dr. Mike Rodriguez",
            1_500_000.0,
        ),
    ];

    for (n, (title, description, field, inventor, value)) in samples.iter().enumerate() {
        let total_tokens = 1000;
        store
            .put_idea(Idea {
                id: Uuid::new_v4(),
                title: title.to_string(),
                description: description.to_string(),
                field: field.to_string(),
                inventor: inventor.to_string(),
                predicted_value: *value,
                total_tokens,
                tokens_sold: 0,
                token_price: value / total_tokens as f64,
                nft_id: format!("IP-DEMO-{:04}", n + 1),
                status: IdeaStatus::Active,
                created_at: Utc::now(),
            })
            .await?;
    }

    store
        .upsert_profile(InvestorProfile {
            id: Uuid::new_v4(),
            name: "Demo Investor".to_string(),
            wallet_address: "andr1demoinvestor123456789".to_string(),
            risk_preference: RiskPreference::Moderate,
            created_at: Utc::now(),
        })
        .await?;

    Ok(())
}
