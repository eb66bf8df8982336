//! Linear-Gaussian BIC score with a tunable penalty discount.

use fang_core::constants::DEFAULT_PENALTY_DISCOUNT;
use fang_core::{DataSet, Node};
use moka::sync::Cache;
use smallvec::SmallVec;

use super::{CovarianceMatrix, Score};

/// Local scores are memoized per `(node, sorted parents)`.
const SCORE_CACHE_ENTRIES: u64 = 100_000;

type ParentKey = SmallVec<[usize; 8]>;

/// `local_score(i, P) = -n ln σ²(i | P) - c (|P| + 1) ln n`.
pub struct SemBicScore {
    covariance: CovarianceMatrix,
    penalty_discount: f64,
    cache: Cache<(usize, ParentKey), f64>,
}

impl SemBicScore {
    pub fn new(covariance: CovarianceMatrix) -> Self {
        Self {
            covariance,
            penalty_discount: DEFAULT_PENALTY_DISCOUNT,
            cache: Cache::builder().max_capacity(SCORE_CACHE_ENTRIES).build(),
        }
    }

    pub fn from_dataset(data: &DataSet) -> Self {
        Self::new(CovarianceMatrix::from_dataset(data))
    }

    /// Changing the discount invalidates cached scores.
    pub fn with_penalty_discount(mut self, penalty_discount: f64) -> Self {
        self.penalty_discount = penalty_discount;
        self.cache.invalidate_all();
        self
    }

    pub fn penalty_discount(&self) -> f64 {
        self.penalty_discount
    }

    fn compute(&self, node: usize, parents: &[usize]) -> f64 {
        let Some(residual) = self.covariance.residual_variance(node, parents) else {
            return f64::NAN;
        };
        let n = self.covariance.sample_size() as f64;
        let s2 = residual.max(f64::MIN_POSITIVE);
        let penalty = self.penalty_discount * (parents.len() + 1) as f64 * n.ln();
        -n * s2.ln() - penalty
    }
}

impl Score for SemBicScore {
    fn local_score(&self, node: usize, parents: &[usize]) -> f64 {
        let mut key: ParentKey = parents.iter().copied().collect();
        key.sort_unstable();
        let key = (node, key);
        if let Some(hit) = self.cache.get(&key) {
            return hit;
        }
        let score = self.compute(node, &key.1);
        self.cache.insert(key, score);
        score
    }

    fn sample_size(&self) -> usize {
        self.covariance.sample_size()
    }

    fn variables(&self) -> &[Node] {
        self.covariance.variables()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_pair() -> DataSet {
        let rows: Vec<Vec<f64>> = (0..200)
            .map(|i| {
                let x = ((i * 37) % 101) as f64 / 50.0 - 1.0;
                let noise = ((i * 53) % 89) as f64 / 445.0 - 0.1;
                let unrelated = ((i * 71) % 97) as f64 / 48.0 - 1.0;
                vec![x, 2.0 * x + noise, unrelated]
            })
            .collect();
        DataSet::from_rows(&["x", "y", "u"], &rows).unwrap()
    }

    #[test]
    fn test_real_parent_raises_score() {
        let score = SemBicScore::from_dataset(&linear_pair());
        assert!(score.local_score_diff(0, 1, &[]) > 0.0);
    }

    #[test]
    fn test_parent_order_does_not_matter() {
        let score = SemBicScore::from_dataset(&linear_pair());
        let a = score.local_score(1, &[0, 2]);
        let b = score.local_score(1, &[2, 0]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_penalty_discount_scales_penalty() {
        let data = linear_pair();
        let base = SemBicScore::from_dataset(&data);
        let heavy = SemBicScore::from_dataset(&data).with_penalty_discount(2.0);
        let n = 200f64;
        let diff = base.local_score(1, &[0]) - heavy.local_score(1, &[0]);
        assert!((diff - 2.0 * n.ln()).abs() < 1e-9);
        assert_eq!(heavy.penalty_discount(), 2.0);
    }

    #[test]
    fn test_exposes_variables_and_sample_size() {
        let score = SemBicScore::from_dataset(&linear_pair());
        assert_eq!(score.sample_size(), 200);
        assert_eq!(score.variables()[2].name(), "u");
    }
}
