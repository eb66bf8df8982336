//! Decomposable local scores over a fixed variable list.

pub mod covariance;
pub mod sem_bic;

pub use covariance::CovarianceMatrix;
pub use sem_bic::SemBicScore;

use fang_core::Node;

/// A decomposable score: the score of a DAG is the sum of `local_score`
/// over its nodes. Higher is better. Variables are referred to by index
/// into [`Score::variables`].
pub trait Score: Send + Sync {
    /// Score of `node` given `parents`. May be NaN when the parent
    /// configuration is numerically degenerate.
    fn local_score(&self, node: usize, parents: &[usize]) -> f64;

    /// Gain from adding `x` to the parents `z` of `y`.
    fn local_score_diff(&self, x: usize, y: usize, z: &[usize]) -> f64 {
        let mut with_x = Vec::with_capacity(z.len() + 1);
        with_x.extend_from_slice(z);
        with_x.push(x);
        self.local_score(y, &with_x) - self.local_score(y, z)
    }

    fn sample_size(&self) -> usize;

    fn variables(&self) -> &[Node];
}
