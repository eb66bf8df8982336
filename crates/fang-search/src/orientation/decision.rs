//! Per-pair statistics and the edge decision rule.
//!
//! `decide_edge` is a pure function of the statistics, the knowledge hint
//! and the thresholds. Rules are tried in a fixed order and the first one
//! that applies wins.

use fang_core::constants::{DEFAULT_ADMISSION_THRESHOLD, DEFAULT_ALPHA};
use fang_core::errors::PairError;
use fang_core::{FeedbackMarker, KnowledgeDirection};

use crate::stats::{
    asymmetry_p_value, asymmetry_t, fisher_z, sign, tail_correlation, TailCondition,
};

/// Orientation of a directed decision relative to the pair `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    XToY,
    YToX,
}

impl From<KnowledgeDirection> for Orientation {
    fn from(direction: KnowledgeDirection) -> Self {
        match direction {
            KnowledgeDirection::Forward => Self::XToY,
            KnowledgeDirection::Backward => Self::YToX,
        }
    }
}

/// Terminal state of one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDecision {
    /// Failed the candidacy gate.
    NoEdge,
    Undirected,
    Directed(Orientation),
    TwoCycle(FeedbackMarker),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionThresholds {
    pub alpha: f64,
    /// Minimum `|c1 - c2|` that admits a non-adjacent pair.
    pub admission_threshold: f64,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            admission_threshold: DEFAULT_ADMISSION_THRESHOLD,
        }
    }
}

/// Correlations and asymmetry p-values of one standardized pair.
///
/// Correlations that are undefined on their subset are `None`, and so is
/// any p-value derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairStatistics<'a> {
    pub x: &'a str,
    pub y: &'a str,
    /// Adjacent in the knowledge-oriented skeleton.
    pub adjacent: bool,
    pub n: usize,
    pub c: Option<f64>,
    /// `x > 0`
    pub c1: Option<f64>,
    /// `y > 0`
    pub c2: Option<f64>,
    /// `x < 0`
    pub c3: Option<f64>,
    /// `y < 0`
    pub c4: Option<f64>,
    pub p1: Option<f64>,
    pub p2: Option<f64>,
}

impl<'a> PairStatistics<'a> {
    pub fn compute(
        x: &'a str,
        y: &'a str,
        x_col: &[f64],
        y_col: &[f64],
        adjacent: bool,
    ) -> Self {
        let n = x_col.len();
        let c = tail_correlation(x_col, y_col, TailCondition::All);
        let c1 = tail_correlation(x_col, y_col, TailCondition::XPositive);
        let c2 = tail_correlation(x_col, y_col, TailCondition::YPositive);
        let c3 = tail_correlation(x_col, y_col, TailCondition::XNegative);
        let c4 = tail_correlation(x_col, y_col, TailCondition::YNegative);

        let p_value = |tail: Option<f64>| {
            let (c, tail) = (c?, tail?);
            asymmetry_p_value(asymmetry_t(fisher_z(c), fisher_z(tail), n), n)
        };

        Self {
            x,
            y,
            adjacent,
            n,
            c,
            c1,
            c2,
            c3,
            c4,
            p1: p_value(c1),
            p2: p_value(c2),
        }
    }

    /// `|c1 - c2|`, when both tails are defined.
    pub fn tail_gap(&self) -> Option<f64> {
        Some((self.c1? - self.c2?).abs())
    }

    /// `R = |c - c2| - |c - c1|`. Positive favours `x → y`.
    pub fn asymmetry(&self) -> Option<f64> {
        let (c, c1, c2) = (self.c?, self.c1?, self.c2?);
        Some((c - c2).abs() - (c - c1).abs())
    }

    pub fn is_candidate(&self, admission_threshold: f64) -> bool {
        self.adjacent || self.tail_gap().is_some_and(|gap| gap > admission_threshold)
    }

    /// Whether the tail correlations agree in sign with `c` on at least one
    /// side. `None` when any of them is undefined.
    pub fn tails_consistent(&self) -> Option<bool> {
        let s = sign(self.c?);
        let x_side = s == sign(self.c1?) && s == sign(self.c3?);
        let y_side = s == sign(self.c2?) && s == sign(self.c4?);
        Some(x_side || y_side)
    }

    /// Tail subsets whose correlation is undefined, in `c1..c4` order.
    pub fn degenerate_tails(&self) -> Vec<PairError> {
        [
            (self.c1, TailCondition::XPositive),
            (self.c2, TailCondition::YPositive),
            (self.c3, TailCondition::XNegative),
            (self.c4, TailCondition::YNegative),
        ]
        .into_iter()
        .filter(|(r, _)| r.is_none())
        .map(|(_, condition)| PairError::DegenerateTail {
            x: self.x.to_string(),
            y: self.y.to_string(),
            condition: condition.describe(self.x, self.y),
        })
        .collect()
    }

    /// A defined `c`/tail pair whose statistic still came out non-finite.
    pub fn has_non_finite_statistic(&self) -> bool {
        self.c.is_some()
            && ((self.c1.is_some() && self.p1.is_none()) || (self.c2.is_some() && self.p2.is_none()))
    }
}

/// Decide the edge for one pair.
///
/// Order: candidacy gate, knowledge, both asymmetry tests significant,
/// tail sign inconsistency, sign of `R`, tie. A rule whose inputs are
/// undefined does not fire. Fails only when a candidate pair without
/// knowledge has no full correlation.
pub fn decide_edge(
    stats: &PairStatistics<'_>,
    hint: Option<KnowledgeDirection>,
    thresholds: &DecisionThresholds,
) -> Result<EdgeDecision, PairError> {
    if !stats.is_candidate(thresholds.admission_threshold) {
        return Ok(EdgeDecision::NoEdge);
    }

    if let Some(direction) = hint {
        return Ok(EdgeDecision::Directed(direction.into()));
    }

    if stats.c.is_none() {
        return Err(PairError::DegenerateCorrelation {
            x: stats.x.to_string(),
            y: stats.y.to_string(),
        });
    }

    if let (Some(p1), Some(p2)) = (stats.p1, stats.p2) {
        if p1 < thresholds.alpha && p2 < thresholds.alpha {
            return Ok(EdgeDecision::TwoCycle(FeedbackMarker::Significance));
        }
    }

    if stats.tails_consistent() == Some(false) {
        return Ok(EdgeDecision::TwoCycle(FeedbackMarker::SignFlip));
    }

    Ok(match stats.asymmetry() {
        Some(r) if r > 0.0 => EdgeDecision::Directed(Orientation::XToY),
        Some(r) if r < 0.0 => EdgeDecision::Directed(Orientation::YToX),
        _ => EdgeDecision::Undirected,
    })
}
