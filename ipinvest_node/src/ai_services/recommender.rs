//! Investment recommendation stub.

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Idea;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub idea_id: Uuid,
    pub title: String,
    /// Confidence-style score in [0.6, 0.95).
    pub score: f64,
    pub reason: String,
}

/// Scores active ideas for display on the marketplace feed.
///
/// Stands in for the reinforcement-learning recommender of the full
/// platform; scores are uniform-random draws, not policy output.
pub struct RecommendationService {
    min_score: f64,
    max_score: f64,
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::new(0.6, 0.95)
    }
}

impl RecommendationService {
    pub fn new(min_score: f64, max_score: f64) -> Self {
        Self {
            min_score,
            max_score,
        }
    }

    pub fn score_idea(&self, idea: &Idea) -> Recommendation {
        Recommendation {
            idea_id: idea.id,
            title: idea.title.clone(),
            score: rand::thread_rng().gen_range(self.min_score..self.max_score),
            reason: format!("High potential in {} sector", idea.field),
        }
    }

    pub fn recommend(&self, ideas: &[Idea]) -> Vec<Recommendation> {
        ideas.iter().map(|idea| self.score_idea(idea)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IdeaStatus;
    use chrono::Utc;

    fn idea(field: &str) -> Idea {
        Idea {
            id: Uuid::new_v4(),
            title: "Test Patent".to_string(),
            description: "desc".to_string(),
            field: field.to_string(),
            inventor: "Dr. Test".to_string(),
            predicted_value: 1_000_000.0,
            total_tokens: 1000,
            tokens_sold: 0,
            token_price: 1000.0,
            nft_id: "IP-TEST".to_string(),
            status: IdeaStatus::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn scores_stay_in_range() {
        let service = RecommendationService::default();
        let idea = idea("Clean Energy");
        for _ in 0..1000 {
            let rec = service.score_idea(&idea);
            assert!((0.6..0.95).contains(&rec.score));
        }
    }

    #[test]
    fn reason_names_the_field() {
        let service = RecommendationService::default();
        let rec = service.score_idea(&idea("Healthcare AI"));
        assert_eq!(rec.reason, "High potential in Healthcare AI sector");
    }

    #[test]
    fn recommends_one_entry_per_idea() {
        let service = RecommendationService::default();
        let ideas = vec![idea("A"), idea("B"), idea("C")];
        assert_eq!(service.recommend(&ideas).len(), 3);
    }
}
