//! `FangSearch`: the end-to-end orchestrator.
//!
//! standardize → SEM-BIC score → score independence test → adjacency
//! search → knowledge pass → pairwise orientation.

use std::time::{Duration, Instant};

use fang_core::errors::PairError;
use fang_core::{DataSet, FangConfig, FangResult, Graph, Knowledge, SearchConfig};
use tracing::{info, warn};

use crate::adjacency::{AdjacencySearch, Fas, Skeleton};
use crate::independence::ScoreIndependenceTest;
use crate::orientation::{orient_with_knowledge, DecisionThresholds, PairwiseOrienter};
use crate::score::SemBicScore;

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Final oriented graph over the dataset's variables.
    pub graph: Graph,
    /// Adjacency search output after the knowledge pass.
    pub skeleton: Skeleton,
    /// Per-pair problems that were skipped or fell through.
    pub diagnostics: Vec<PairError>,
    pub elapsed: Duration,
}

pub struct FangSearch {
    data: DataSet,
    config: SearchConfig,
    knowledge: Knowledge,
    adjacency: Option<Box<dyn AdjacencySearch>>,
    verbose: bool,
    elapsed: Option<Duration>,
}

impl FangSearch {
    pub fn new(data: DataSet) -> Self {
        Self {
            data,
            config: SearchConfig::default(),
            knowledge: Knowledge::new(),
            adjacency: None,
            verbose: false,
            elapsed: None,
        }
    }

    /// Build from a resolved [`FangConfig`]. Knowledge entries naming
    /// variables absent from `data` are kept but logged.
    pub fn from_config(data: DataSet, config: &FangConfig) -> Self {
        let knowledge = config.knowledge.to_knowledge();
        let mut unknown: Vec<&str> = knowledge
            .mentioned_names()
            .filter(|name| data.index_of(name).is_none())
            .collect();
        unknown.sort_unstable();
        unknown.dedup();
        for name in unknown {
            warn!(variable = %name, "knowledge names a variable not in the dataset");
        }
        Self::new(data)
            .with_config(config.search.clone())
            .with_knowledge(knowledge)
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Maximum conditioning-set size. -1 = unbounded.
    pub fn with_depth(mut self, depth: i32) -> Self {
        self.config.depth = Some(depth);
        self
    }

    pub fn with_penalty_discount(mut self, penalty_discount: f64) -> Self {
        self.config.penalty_discount = Some(penalty_discount);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = Some(alpha);
        self
    }

    pub fn with_admission_threshold(mut self, threshold: f64) -> Self {
        self.config.admission_threshold = Some(threshold);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = Some(parallel);
        self
    }

    /// Log adjacency removals at `info`. Ignored by injected searches.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_knowledge(mut self, knowledge: Knowledge) -> Self {
        self.knowledge = knowledge;
        self
    }

    /// Replace the default [`Fas`] with another adjacency search.
    pub fn with_adjacency_search(mut self, search: Box<dyn AdjacencySearch>) -> Self {
        self.adjacency = Some(search);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// Wall-clock time of the last successful [`FangSearch::search`].
    pub fn elapsed_time(&self) -> Option<Duration> {
        self.elapsed
    }

    pub fn search(&mut self) -> FangResult<SearchOutcome> {
        self.config.validate()?;
        let start = Instant::now();

        info!(
            variables = self.data.n_variables(),
            samples = self.data.n_samples(),
            "fang: standardizing"
        );
        let standardized = self.data.standardize()?;

        let score = SemBicScore::from_dataset(&standardized)
            .with_penalty_discount(self.config.effective_penalty_discount());
        let test = ScoreIndependenceTest::new(score);

        info!(depth = self.config.effective_depth(), "fang: adjacency search");
        let mut skeleton = match &self.adjacency {
            Some(search) => search.search(&test, &self.knowledge)?,
            None => Fas::new(self.config.depth_bound())
                .with_verbose(self.verbose)
                .search(&test, &self.knowledge)?,
        };

        let oriented = orient_with_knowledge(&mut skeleton.graph, &self.knowledge);
        info!(
            skeleton_edges = skeleton.graph.edge_count(),
            oriented,
            "fang: knowledge pass"
        );

        let thresholds = DecisionThresholds {
            alpha: self.config.effective_alpha(),
            admission_threshold: self.config.effective_admission_threshold(),
        };
        info!(parallel = self.config.effective_parallel(), "fang: orientation");
        let result = PairwiseOrienter::new(&standardized, &self.knowledge, thresholds)
            .with_parallel(self.config.effective_parallel())
            .orient(&skeleton.graph);

        let elapsed = start.elapsed();
        self.elapsed = Some(elapsed);
        info!(
            edges = result.graph.edge_count(),
            two_cycles = result.graph.two_cycles().len(),
            diagnostics = result.diagnostics.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "fang: done"
        );

        Ok(SearchOutcome {
            graph: result.graph,
            skeleton,
            diagnostics: result.diagnostics,
            elapsed,
        })
    }
}
