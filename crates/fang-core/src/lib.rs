//! # fang-core
//!
//! Foundation crate for the FANG causal search.
//! Defines the data model, background knowledge, the output graph,
//! errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod data;
pub mod errors;
pub mod graph;
pub mod knowledge;
pub mod telemetry;

// Re-export the most commonly used types at the crate root.
pub use config::{FangConfig, SearchConfig};
pub use data::{DataSet, Node};
pub use errors::{FangResult, SearchError};
pub use graph::{Edge, EdgeKind, FeedbackMarker, Graph};
pub use knowledge::{Knowledge, KnowledgeDirection};
