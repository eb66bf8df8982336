//! Search parameters.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Parameters of one search run. Unset fields fall back to the defaults in
/// [`crate::constants`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum conditioning-set size for the adjacency search. -1 = unbounded.
    pub depth: Option<i32>,
    /// Multiplier on the SEM-BIC complexity penalty. Default: 1.0.
    pub penalty_discount: Option<f64>,
    /// Significance level for the two-cycle asymmetry tests. Default: 1e-6.
    pub alpha: Option<f64>,
    /// `|c1 - c2|` above which a non-adjacent pair is still oriented. Default: 0.3.
    pub admission_threshold: Option<f64>,
    /// Evaluate variable pairs on the rayon pool. Default: true.
    pub parallel: Option<bool>,
}

impl SearchConfig {
    pub fn effective_depth(&self) -> i32 {
        self.depth.unwrap_or(constants::UNBOUNDED_DEPTH)
    }

    /// Depth as a bound, `None` when unbounded.
    pub fn depth_bound(&self) -> Option<usize> {
        usize::try_from(self.effective_depth()).ok()
    }

    pub fn effective_penalty_discount(&self) -> f64 {
        self.penalty_discount
            .unwrap_or(constants::DEFAULT_PENALTY_DISCOUNT)
    }

    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(constants::DEFAULT_ALPHA)
    }

    pub fn effective_admission_threshold(&self) -> f64 {
        self.admission_threshold
            .unwrap_or(constants::DEFAULT_ADMISSION_THRESHOLD)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    /// Reject values the search cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let depth = self.effective_depth();
        if depth < constants::UNBOUNDED_DEPTH {
            return Err(ConfigError::ValidationFailed {
                field: "search.depth".to_string(),
                message: format!("must be -1 (unbounded) or non-negative, got {depth}"),
            });
        }
        let alpha = self.effective_alpha();
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigError::ValidationFailed {
                field: "search.alpha".to_string(),
                message: format!("must be between 0.0 and 1.0, got {alpha}"),
            });
        }
        let penalty = self.effective_penalty_discount();
        if !penalty.is_finite() || penalty < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "search.penalty_discount".to_string(),
                message: format!("must be a finite value >= 0, got {penalty}"),
            });
        }
        let threshold = self.effective_admission_threshold();
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "search.admission_threshold".to_string(),
                message: format!("must be a finite value >= 0, got {threshold}"),
            });
        }
        Ok(())
    }
}
