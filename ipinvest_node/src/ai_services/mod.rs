//! Demo AI services.
//!
//! Both services fabricate their numbers with uniform-random draws — no
//! model is trained against live marketplace data. They exist so the API
//! surface matches the full platform while staying honest about being a
//! demo.

pub mod recommender;
pub mod valuation;

pub use recommender::{Recommendation, RecommendationService};
pub use valuation::ValuationService;
