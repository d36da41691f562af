//! Royalty split computation for tokenized IP assets.
//!
//! Revenue from an idea is divided between its creator (a fixed share from
//! configuration) and everyone holding fractional tokens, pro-rata to the
//! tokens they purchased. The allocation is recomputed on demand from the
//! current investment list and is never persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allocation failures. Everything else (bad creator share, missing idea)
/// is rejected before the allocator is reached.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoyaltyError {
    #[error("no eligible investor entries to allocate against")]
    InsufficientParticipants,
}

/// One investor position: wallet address and tokens purchased.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorStake {
    pub address: String,
    pub tokens: u64,
}

impl InvestorStake {
    pub fn new(address: impl Into<String>, tokens: u64) -> Self {
        Self {
            address: address.into(),
            tokens,
        }
    }
}

/// A single participant in the split. `percent` is a fraction of 1.0,
/// not of 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoyaltyEntry {
    pub address: String,
    pub percent: f64,
}

/// The computed split: creator entry plus investor entries in the same
/// order the stakes were supplied. Ordering matters downstream, where the
/// entries index into the Splitter contract's recipient list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoyaltyAllocation {
    pub creator: RoyaltyEntry,
    pub investors: Vec<RoyaltyEntry>,
}

impl RoyaltyAllocation {
    /// Sum of all percentages. Equals 1.0 within 1e-9 for any allocation
    /// this module produces.
    pub fn total(&self) -> f64 {
        self.creator.percent + self.investors.iter().map(|e| e.percent).sum::<f64>()
    }

    /// All entries, creator first.
    pub fn entries(&self) -> impl Iterator<Item = &RoyaltyEntry> {
        std::iter::once(&self.creator).chain(self.investors.iter())
    }
}

/// Compute the royalty split for one idea.
///
/// The creator keeps `creator_share` of the pool; the remaining
/// `1 - creator_share` is divided among `stakes` proportionally to their
/// token counts. Stakes from the same address stay separate entries —
/// callers that want one entry per address must sum them beforehand.
///
/// `creator_share` must lie strictly between 0 and 1; that is validated at
/// the configuration boundary and only debug-asserted here. The function is
/// pure: no I/O, no shared state, safe to call concurrently.
pub fn allocate(
    creator_address: &str,
    creator_share: f64,
    stakes: &[InvestorStake],
) -> Result<RoyaltyAllocation, RoyaltyError> {
    debug_assert!(
        creator_share > 0.0 && creator_share < 1.0,
        "creator share must be in (0, 1)"
    );

    let total_tokens: u64 = stakes.iter().map(|s| s.tokens).sum();
    if stakes.is_empty() || total_tokens == 0 {
        return Err(RoyaltyError::InsufficientParticipants);
    }

    let pool = 1.0 - creator_share;
    let investors = stakes
        .iter()
        .map(|s| RoyaltyEntry {
            address: s.address.clone(),
            percent: s.tokens as f64 / total_tokens as f64 * pool,
        })
        .collect();

    Ok(RoyaltyAllocation {
        creator: RoyaltyEntry {
            address: creator_address.to_string(),
            percent: creator_share,
        },
        investors,
    })
}

/// Render a fraction-of-1.0 as the decimal string the Splitter contract
/// expects: `0.7`, `0.0234`. Nine fractional digits, trailing zeros dropped.
pub fn format_fraction(value: f64) -> String {
    let s = format!("{:.9}", value);
    let s = s.trim_end_matches('0');
    s.trim_end_matches('.').to_string()
}

/// Render a fraction for display: `0.234` becomes `"23.40%"`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
