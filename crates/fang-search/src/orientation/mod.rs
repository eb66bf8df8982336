//! Edge orientation: the knowledge pass over the skeleton, then the
//! pairwise tail-asymmetry engine.

pub mod decision;
pub mod knowledge_pass;
pub mod pairwise;

pub use decision::{decide_edge, DecisionThresholds, EdgeDecision, Orientation, PairStatistics};
pub use knowledge_pass::orient_with_knowledge;
pub use pairwise::{OrientationResult, PairEvaluation, PairwiseOrienter};
