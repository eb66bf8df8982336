//! `StableGraph` wrapper with a name → index map.
//!
//! Invariant: between two nodes there is either nothing, exactly one
//! undirected record, or one or two directed records (two means a two-cycle).

use std::collections::BTreeSet;

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Directed;
use rustc_hash::FxHashMap;

use super::edge::{Edge, EdgeAttributes, EdgeKind, FeedbackMarker};
use crate::data::Node;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    graph: StableGraph<Node, EdgeAttributes, Directed>,
    node_index: FxHashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph over `nodes` with no edges.
    pub fn with_nodes(nodes: &[Node]) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.ensure_node(node.name());
        }
        graph
    }

    /// Get or create the node for `name`.
    pub fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(Node::new(name));
        self.node_index.insert(name.to_string(), idx);
        idx
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> Vec<&Node> {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edge records; a two-cycle counts twice.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Add `a --- b`. Refused for self-loops or when the pair already has any edge.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str) -> bool {
        if a == b || self.is_adjacent(a, b) {
            return false;
        }
        let (ia, ib) = (self.ensure_node(a), self.ensure_node(b));
        self.graph.add_edge(
            ia,
            ib,
            EdgeAttributes {
                kind: EdgeKind::Undirected,
                marker: None,
            },
        );
        true
    }

    /// Add `from --> to`. Refused for self-loops, duplicates, or when the pair
    /// is joined by an undirected edge. The reverse directed edge may coexist.
    pub fn add_directed_edge(&mut self, from: &str, to: &str) -> bool {
        self.add_marked_directed_edge(from, to, None)
    }

    fn add_marked_directed_edge(
        &mut self,
        from: &str,
        to: &str,
        marker: Option<FeedbackMarker>,
    ) -> bool {
        if from == to || self.is_directed_from_to(from, to) || self.is_undirected(from, to) {
            return false;
        }
        let (ia, ib) = (self.ensure_node(from), self.ensure_node(to));
        self.graph.add_edge(
            ia,
            ib,
            EdgeAttributes {
                kind: EdgeKind::Directed,
                marker,
            },
        );
        true
    }

    /// Add both `a --> b` and `b --> a`, each tagged with `marker`.
    pub fn add_two_cycle(&mut self, a: &str, b: &str, marker: Option<FeedbackMarker>) -> bool {
        let forward = self.add_marked_directed_edge(a, b, marker);
        let backward = self.add_marked_directed_edge(b, a, marker);
        forward && backward
    }

    /// Remove every record between `a` and `b`. Returns how many were removed.
    pub fn remove_edges(&mut self, a: &str, b: &str) -> usize {
        let ids = self.edge_ids_between(a, b);
        for &id in &ids {
            self.graph.remove_edge(id);
        }
        ids.len()
    }

    fn edge_ids_between(&self, a: &str, b: &str) -> Vec<EdgeIndex> {
        let (Some(&ia), Some(&ib)) = (self.node_index.get(a), self.node_index.get(b)) else {
            return Vec::new();
        };
        self.graph
            .edges_connecting(ia, ib)
            .chain(self.graph.edges_connecting(ib, ia))
            .map(|e| e.id())
            .collect()
    }

    /// Records between `a` and `b`, either stored direction.
    pub fn edges_between(&self, a: &str, b: &str) -> Vec<Edge> {
        self.edge_ids_between(a, b)
            .into_iter()
            .filter_map(|id| self.edge_record(id))
            .collect()
    }

    fn edge_record(&self, id: EdgeIndex) -> Option<Edge> {
        let (source, target) = self.graph.edge_endpoints(id)?;
        let weight = self.graph.edge_weight(id)?;
        Some(Edge {
            node1: self.graph.node_weight(source)?.name().to_string(),
            node2: self.graph.node_weight(target)?.name().to_string(),
            kind: weight.kind,
            marker: weight.marker,
        })
    }

    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        !self.edge_ids_between(a, b).is_empty()
    }

    pub fn is_directed_from_to(&self, from: &str, to: &str) -> bool {
        self.edges_between(from, to)
            .iter()
            .any(|e| e.kind == EdgeKind::Directed && e.node1 == from)
    }

    pub fn is_undirected(&self, a: &str, b: &str) -> bool {
        self.edges_between(a, b)
            .iter()
            .any(|e| e.kind == EdgeKind::Undirected)
    }

    pub fn is_two_cycle(&self, a: &str, b: &str) -> bool {
        self.is_directed_from_to(a, b) && self.is_directed_from_to(b, a)
    }

    /// Names adjacent to `name` by any edge, sorted.
    pub fn adjacent_nodes(&self, name: &str) -> Vec<String> {
        let Some(&idx) = self.node_index.get(name) else {
            return Vec::new();
        };
        let names: BTreeSet<String> = self
            .graph
            .neighbors_undirected(idx)
            .filter_map(|n| self.graph.node_weight(n))
            .map(|n| n.name().to_string())
            .collect();
        names.into_iter().collect()
    }

    /// All edge records in index order.
    pub fn edges(&self) -> Vec<Edge> {
        self.graph
            .edge_indices()
            .filter_map(|id| self.edge_record(id))
            .collect()
    }

    /// Name-keyed, order-independent view of the edges. Two graphs describe
    /// the same structure iff their edge sets are equal.
    pub fn edge_set(&self) -> BTreeSet<Edge> {
        self.edges().iter().map(Edge::canonical).collect()
    }

    /// Unordered pairs joined by a two-cycle, each as `(smaller, larger)` by name.
    pub fn two_cycles(&self) -> Vec<(String, String)> {
        let pairs: BTreeSet<(String, String)> = self
            .edges()
            .into_iter()
            .filter(|e| e.kind == EdgeKind::Directed && e.node1 < e.node2)
            .filter(|e| self.is_directed_from_to(&e.node2, &e.node1))
            .map(|e| (e.node1, e.node2))
            .collect();
        pairs.into_iter().collect()
    }

    /// Strongly connected components of the directed part with more than one
    /// node, i.e. the feedback structures. Names within a component are sorted.
    pub fn feedback_components(&self) -> Vec<Vec<String>> {
        let directed = self.graph.filter_map(
            |_, node| Some(node.clone()),
            |_, weight| (weight.kind == EdgeKind::Directed).then_some(()),
        );
        let mut components: Vec<Vec<String>> = tarjan_scc(&directed)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let mut names: Vec<String> = scc
                    .into_iter()
                    .filter_map(|idx| directed.node_weight(idx))
                    .map(|n| n.name().to_string())
                    .collect();
                names.sort();
                names
            })
            .collect();
        components.sort();
        components
    }
}
