//! Variables and continuous datasets.

pub mod dataset;
pub mod node;

pub use dataset::{standardize_column, DataSet};
pub use node::Node;
