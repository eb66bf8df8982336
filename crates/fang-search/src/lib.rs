//! # fang-search
//!
//! Fast adjacency search followed by robust-skew orientation, with checks
//! for two-cycles. The two-cycle checks do not need non-Gaussian data; the
//! left/right orientation does.
//!
//! Pipeline: standardize → SEM-BIC score → score-based independence test →
//! fast adjacency search → knowledge pass → pairwise orientation.

pub mod adjacency;
pub mod engine;
pub mod independence;
pub mod orientation;
pub mod score;
pub mod stats;

pub use adjacency::{AdjacencySearch, Fas, Skeleton};
pub use engine::{FangSearch, SearchOutcome};
pub use independence::{IndependenceResult, IndependenceTest, ScoreIndependenceTest};
pub use orientation::{decide_edge, EdgeDecision, PairStatistics};
pub use score::{Score, SemBicScore};
