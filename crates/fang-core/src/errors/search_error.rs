//! Top-level search error. Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, FangErrorCode};
use super::{ConfigError, DataError};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Adjacency search error: {reason}")]
    AdjacencySearch { reason: String },
}

impl FangErrorCode for SearchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Data(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::AdjacencySearch { .. } => error_code::ADJACENCY_ERROR,
        }
    }
}

pub type FangResult<T> = Result<T, SearchError>;
