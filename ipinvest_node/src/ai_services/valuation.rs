//! Idea valuation stub.

use rand::Rng;

/// Produces a fabricated monetary valuation for a submitted idea.
///
/// A production deployment would back this with a trained regression model;
/// the demo draws uniformly from a plausible range instead.
pub struct ValuationService {
    min_value: f64,
    max_value: f64,
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new(500_000.0, 3_000_000.0)
    }
}

impl ValuationService {
    pub fn new(min_value: f64, max_value: f64) -> Self {
        Self {
            min_value,
            max_value,
        }
    }

    /// Appraise an idea. The inputs are accepted for interface parity with
    /// a real model; the demo draw ignores them.
    pub fn appraise(&self, _description: &str, _field: &str) -> f64 {
        rand::thread_rng().gen_range(self.min_value..self.max_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appraisal_stays_in_range() {
        let service = ValuationService::default();
        for _ in 0..1000 {
            let value = service.appraise("some patent", "Quantum Computing");
            assert!((500_000.0..3_000_000.0).contains(&value));
        }
    }

    #[test]
    fn appraisal_is_always_positive() {
        let service = ValuationService::new(1.0, 2.0);
        assert!(service.appraise("", "") > 0.0);
    }
}
