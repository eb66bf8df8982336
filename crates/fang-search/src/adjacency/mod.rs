//! Skeleton discovery: which pairs stay adjacent after conditional
//! independence testing.

pub mod fas;
pub mod sepsets;
pub mod subsets;

pub use fas::Fas;
pub use sepsets::SepsetMap;
pub use subsets::Combinations;

use fang_core::{FangResult, Graph, Knowledge};

use crate::independence::IndependenceTest;

/// Undirected adjacency graph plus the separating set recorded for every
/// removed pair.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    pub graph: Graph,
    pub sepsets: SepsetMap,
}

/// Produces a [`Skeleton`] from an independence oracle. Knowledge may
/// forbid or require adjacencies.
pub trait AdjacencySearch: Send + Sync {
    fn search(&self, test: &dyn IndependenceTest, knowledge: &Knowledge) -> FangResult<Skeleton>;
}
