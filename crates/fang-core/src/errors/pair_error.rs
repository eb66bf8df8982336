//! Per-pair evaluation errors. Non-fatal: the pair is skipped or falls
//! through to a weaker decision rule, and the rest of the graph is kept.

use super::error_code::{self, FangErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PairError {
    #[error("correlation of {x} and {y} is undefined")]
    DegenerateCorrelation { x: String, y: String },

    #[error("tail subset {condition} of {x} and {y} has too few samples or no variance")]
    DegenerateTail {
        x: String,
        y: String,
        condition: String,
    },

    #[error("asymmetry statistic for {x} and {y} is not finite")]
    NonFiniteStatistic { x: String, y: String },
}

impl FangErrorCode for PairError {
    fn error_code(&self) -> &'static str {
        error_code::DEGENERATE_PAIR
    }
}
