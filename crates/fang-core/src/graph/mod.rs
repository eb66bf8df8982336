//! Mixed graph over measured variables: undirected edges, directed edges,
//! and two-cycles stored as a pair of opposite directed edges.

pub mod edge;
pub mod mixed_graph;

pub use edge::{Edge, EdgeKind, FeedbackMarker};
pub use mixed_graph::Graph;
