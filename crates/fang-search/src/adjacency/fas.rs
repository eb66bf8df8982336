//! Fast adjacency search, order-independent ("stable") variant.
//!
//! Starts from the complete undirected graph. At depth `d`, every adjacent
//! pair is tested against conditioning sets of size `d` drawn from the
//! adjacencies frozen at the start of that depth, so the removal order
//! within a depth does not change the result.

use std::collections::BTreeSet;

use fang_core::{FangResult, Graph, Knowledge, SearchError};
use tracing::{debug, info};

use super::subsets::{CondSet, Combinations};
use super::{AdjacencySearch, SepsetMap, Skeleton};
use crate::independence::IndependenceTest;

#[derive(Debug, Clone, Default)]
pub struct Fas {
    depth: Option<usize>,
    verbose: bool,
}

impl Fas {
    /// `None` means no bound on the conditioning set size.
    pub fn new(depth: Option<usize>) -> Self {
        Self {
            depth,
            verbose: false,
        }
    }

    /// Log every removed edge at `info` instead of `debug`.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn report_removal(&self, x: &str, y: &str, sepset: &[String], score: f64) {
        if self.verbose {
            info!(x = %x, y = %y, sepset = ?sepset, score, "independence: edge removed");
        } else {
            debug!(x = %x, y = %y, sepset = ?sepset, score, "independence: edge removed");
        }
    }

    /// First conditioning set of size `d` from either side that separates
    /// `x` and `y`.
    fn find_sepset(
        &self,
        test: &dyn IndependenceTest,
        frozen: &[Vec<usize>],
        x: usize,
        y: usize,
        d: usize,
    ) -> Option<(CondSet, f64)> {
        for (a, b) in [(x, y), (y, x)] {
            let pool: Vec<usize> = frozen[a].iter().copied().filter(|&v| v != b).collect();
            if pool.len() < d {
                continue;
            }
            for z in Combinations::new(&pool, d) {
                let result = test.check_independence(x, y, &z);
                if result.independent {
                    return Some((z, result.score));
                }
            }
        }
        None
    }
}

impl AdjacencySearch for Fas {
    fn search(&self, test: &dyn IndependenceTest, knowledge: &Knowledge) -> FangResult<Skeleton> {
        let nodes = test.variables();
        if nodes.is_empty() {
            return Err(SearchError::AdjacencySearch {
                reason: "independence test has no variables".to_string(),
            });
        }
        let p = nodes.len();
        let name = |i: usize| nodes[i].name();

        let mut adjacency: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); p];
        for x in 0..p {
            for y in x + 1..p {
                if !knowledge.forbids_adjacency(name(x), name(y)) {
                    adjacency[x].insert(y);
                    adjacency[y].insert(x);
                }
            }
        }

        let mut sepsets = SepsetMap::new();
        let mut d = 0usize;
        loop {
            if self.depth.is_some_and(|bound| d > bound) {
                break;
            }
            let frozen: Vec<Vec<usize>> = adjacency
                .iter()
                .map(|set| set.iter().copied().collect())
                .collect();
            if frozen.iter().all(|adj| adj.len() <= d) {
                break;
            }

            let mut removed = 0usize;
            for x in 0..p {
                for &y in frozen[x].iter().filter(|&&y| y > x) {
                    if knowledge.requires_adjacency(name(x), name(y)) {
                        continue;
                    }
                    if let Some((z, score)) = self.find_sepset(test, &frozen, x, y, d) {
                        adjacency[x].remove(&y);
                        adjacency[y].remove(&x);
                        let sepset: Vec<String> = z.iter().map(|&v| name(v).to_string()).collect();
                        self.report_removal(name(x), name(y), &sepset, score);
                        sepsets.insert(name(x), name(y), sepset);
                        removed += 1;
                    }
                }
            }
            debug!(depth = d, removed, "adjacency search depth complete");
            d += 1;
        }

        let mut graph = Graph::with_nodes(nodes);
        for x in 0..p {
            for &y in adjacency[x].iter().filter(|&&y| y > x) {
                graph.add_undirected_edge(name(x), name(y));
            }
        }
        Ok(Skeleton { graph, sepsets })
    }
}
