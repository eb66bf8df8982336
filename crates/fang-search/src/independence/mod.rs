//! Conditional independence oracles consumed by the adjacency search.


pub use score_test::ScoreIndependenceTest;

use fang_core::Node;

/// Outcome of one conditional independence query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndependenceResult {
    pub independent: bool,
    /// Test-specific strength. For score-based tests, the score gain.
    pub score: f64,
}

/// Answers "is `x` independent of `y` given `z`?" over indexed variables.
pub trait IndependenceTest: Send + Sync {
    fn check_independence(&self, x: usize, y: usize, z: &[usize]) -> IndependenceResult;

    fn variables(&self) -> &[Node];

    fn sample_size(&self) -> usize;
}
