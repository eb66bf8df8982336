//! Background knowledge takes precedence over statistical evidence.

mod common;

use fang_core::{FangConfig, Knowledge};
use fang_search::adjacency::{AdjacencySearch, Skeleton};
use fang_search::independence::IndependenceTest;
use fang_search::FangSearch;

#[test]
fn required_edge_overrides_skew_evidence() {
    // The data says A → B; knowledge insists on B → A.
    let mut knowledge = Knowledge::new();
    knowledge.require("B", "A");
    let outcome = FangSearch::new(common::chain(7, 1000))
        .with_knowledge(knowledge)
        .search()
        .unwrap();
    let g = &outcome.graph;
    assert!(g.is_directed_from_to("B", "A"));
    assert!(!g.is_directed_from_to("A", "B"));
    assert!(g.is_directed_from_to("B", "C"));
    assert!(outcome.skeleton.graph.is_directed_from_to("B", "A"));
}

#[test]
fn required_edge_survives_independent_data() {
    let mut knowledge = Knowledge::new();
    knowledge.require("X", "Y");
    let outcome = FangSearch::new(common::independent_x(11, 1000))
        .with_knowledge(knowledge)
        .search()
        .unwrap();
    let g = &outcome.graph;
    assert!(g.is_directed_from_to("X", "Y"));
    assert!(!g.is_directed_from_to("Y", "X"));
    assert!(!g.is_adjacent("X", "Z"));
}

#[test]
fn doubly_forbidden_pair_is_never_adjacent() {
    let mut knowledge = Knowledge::new();
    knowledge.forbid("A", "B").forbid("B", "A");
    let outcome = FangSearch::new(common::chain(7, 1000))
        .with_knowledge(knowledge)
        .search()
        .unwrap();
    assert!(!outcome.skeleton.graph.is_adjacent("A", "B"));
    assert!(!outcome.graph.is_adjacent("A", "B"));
}

#[test]
fn contradictory_requirements_ignore_column_order() {
    let mut knowledge = Knowledge::new();
    knowledge.require("A", "B").require("B", "A");
    let forward = FangSearch::new(common::chain(7, 1000))
        .with_knowledge(knowledge.clone())
        .search()
        .unwrap();
    let reversed = FangSearch::new(common::chain_permuted(7, 1000, [2, 1, 0]))
        .with_knowledge(knowledge)
        .search()
        .unwrap();
    assert!(forward.graph.is_directed_from_to("A", "B"));
    assert!(!forward.graph.is_directed_from_to("B", "A"));
    assert_eq!(forward.graph.edge_set(), reversed.graph.edge_set());
}

#[test]
fn tiers_orient_against_the_data() {
    let mut knowledge = Knowledge::new();
    knowledge
        .set_tier(0, &["C"])
        .set_tier(1, &["B"])
        .set_tier(2, &["A"]);
    let outcome = FangSearch::new(common::chain(7, 1000))
        .with_knowledge(knowledge)
        .search()
        .unwrap();
    let g = &outcome.graph;
    assert!(g.is_directed_from_to("C", "B"));
    assert!(g.is_directed_from_to("B", "A"));
    assert!(!g.is_adjacent("A", "C"));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn knowledge_from_toml_config() {
    let config = FangConfig::from_toml(
        r#"
        [search]
        depth = -1
        parallel = false

        [knowledge]
        required = [["C", "B"]]
        forbidden = [["Q", "A"]]
        "#,
    )
    .unwrap();
    let mut search = FangSearch::from_config(common::chain(7, 1000), &config);
    assert!(!search.config().effective_parallel());
    let outcome = search.search().unwrap();
    assert!(outcome.graph.is_directed_from_to("C", "B"));
    assert!(outcome.graph.is_directed_from_to("A", "B"));
}

/// Adjacency search that always returns the complete graph.
struct Complete;

impl AdjacencySearch for Complete {
    fn search(
        &self,
        test: &dyn IndependenceTest,
        _knowledge: &Knowledge,
    ) -> fang_core::FangResult<Skeleton> {
        let mut skeleton = Skeleton::default();
        let names: Vec<&str> = test.variables().iter().map(|n| n.name()).collect();
        for (i, a) in names.iter().enumerate() {
            skeleton.graph.ensure_node(a);
            for b in &names[i + 1..] {
                skeleton.graph.add_undirected_edge(a, b);
            }
        }
        Ok(skeleton)
    }
}

#[test]
fn injected_adjacency_search_is_used() {
    let outcome = FangSearch::new(common::chain(7, 1000))
        .with_adjacency_search(Box::new(Complete))
        .search()
        .unwrap();
    assert_eq!(outcome.skeleton.graph.edge_count(), 3);
    assert!(outcome.skeleton.sepsets.is_empty());
    assert!(outcome.graph.is_adjacent("A", "C"));
}
