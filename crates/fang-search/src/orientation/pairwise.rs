//! Pairwise orientation over every variable pair of the standardized data.
//!
//! Each pair depends only on its two columns, the skeleton and the
//! knowledge, so pairs are evaluated independently (optionally on the rayon
//! pool) and applied to a fresh graph in ascending `(i, j)` order.

use fang_core::errors::PairError;
use fang_core::{DataSet, Graph, Knowledge};
use rayon::prelude::*;
use tracing::{debug, warn};

use super::decision::{decide_edge, DecisionThresholds, EdgeDecision, Orientation, PairStatistics};

/// Result of evaluating one pair, before it is applied to the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct PairEvaluation {
    pub i: usize,
    pub j: usize,
    pub decision: Result<EdgeDecision, PairError>,
    /// Non-fatal problems seen on a candidate pair.
    pub notes: Vec<PairError>,
}

#[derive(Debug, Clone, Default)]
pub struct OrientationResult {
    pub graph: Graph,
    pub diagnostics: Vec<PairError>,
}

pub struct PairwiseOrienter<'a> {
    data: &'a DataSet,
    knowledge: &'a Knowledge,
    thresholds: DecisionThresholds,
    parallel: bool,
}

impl<'a> PairwiseOrienter<'a> {
    /// `data` must already be standardized.
    pub fn new(data: &'a DataSet, knowledge: &'a Knowledge, thresholds: DecisionThresholds) -> Self {
        Self {
            data,
            knowledge,
            thresholds,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn evaluate(&self, skeleton: &Graph, i: usize, j: usize) -> PairEvaluation {
        let (x, y) = (self.data.variable(i).name(), self.data.variable(j).name());
        let stats = PairStatistics::compute(
            x,
            y,
            self.data.column(i),
            self.data.column(j),
            skeleton.is_adjacent(x, y),
        );
        let hint = self.knowledge.orientation(x, y);
        let decision = decide_edge(&stats, hint, &self.thresholds);

        let mut notes = Vec::new();
        if stats.is_candidate(self.thresholds.admission_threshold) && hint.is_none() {
            notes.extend(stats.degenerate_tails());
            if stats.has_non_finite_statistic() {
                notes.push(PairError::NonFiniteStatistic {
                    x: x.to_string(),
                    y: y.to_string(),
                });
            }
        }

        PairEvaluation {
            i,
            j,
            decision,
            notes,
        }
    }

    pub fn orient(&self, skeleton: &Graph) -> OrientationResult {
        let p = self.data.n_variables();
        let pairs: Vec<(usize, usize)> = (0..p)
            .flat_map(|i| (i + 1..p).map(move |j| (i, j)))
            .collect();

        // `collect` on an indexed parallel iterator keeps input order.
        let evaluations: Vec<PairEvaluation> = if self.parallel {
            pairs
                .par_iter()
                .map(|&(i, j)| self.evaluate(skeleton, i, j))
                .collect()
        } else {
            pairs
                .iter()
                .map(|&(i, j)| self.evaluate(skeleton, i, j))
                .collect()
        };

        let mut result = OrientationResult {
            graph: Graph::with_nodes(self.data.variables()),
            diagnostics: Vec::new(),
        };
        for evaluation in evaluations {
            self.apply(&mut result, evaluation);
        }
        result
    }

    fn apply(&self, result: &mut OrientationResult, evaluation: PairEvaluation) {
        let x = self.data.variable(evaluation.i).name();
        let y = self.data.variable(evaluation.j).name();
        for note in evaluation.notes {
            warn!(x = %x, y = %y, error = %note, "pair diagnostic");
            result.diagnostics.push(note);
        }
        let decision = match evaluation.decision {
            Ok(decision) => decision,
            Err(err) => {
                warn!(x = %x, y = %y, error = %err, "pair skipped");
                result.diagnostics.push(err);
                return;
            }
        };
        debug!(x = %x, y = %y, decision = ?decision, "pair decided");
        let graph = &mut result.graph;
        match decision {
            EdgeDecision::NoEdge => {}
            EdgeDecision::Undirected => {
                graph.add_undirected_edge(x, y);
            }
            EdgeDecision::Directed(Orientation::XToY) => {
                graph.add_directed_edge(x, y);
            }
            EdgeDecision::Directed(Orientation::YToX) => {
                graph.add_directed_edge(y, x);
            }
            EdgeDecision::TwoCycle(marker) => {
                graph.add_two_cycle(x, y, Some(marker));
            }
        }
    }
}
