//! Dataset shape and input-quality errors.

use super::error_code::{self, FangErrorCode};

/// Errors detected while building or standardizing a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("dataset has no variables")]
    Empty,

    #[error("expected {expected} columns for {expected} variables, got {actual}")]
    ColumnCountMismatch { expected: usize, actual: usize },

    #[error("column {variable} has {actual} samples, expected {expected}")]
    RaggedColumn {
        variable: String,
        expected: usize,
        actual: usize,
    },

    #[error("variable {name} appears more than once")]
    DuplicateVariable { name: String },

    #[error("need at least {required} samples, got {actual}")]
    TooFewSamples { required: usize, actual: usize },

    #[error("non-finite value {value} in {variable} at row {row}")]
    NonFiniteValue {
        variable: String,
        row: usize,
        value: f64,
    },

    #[error("column {variable} has zero variance")]
    ZeroVariance { variable: String },
}

impl DataError {
    /// Whether this is a data-quality rejection rather than a shape error.
    pub fn is_input_quality(&self) -> bool {
        matches!(
            self,
            Self::NonFiniteValue { .. } | Self::ZeroVariance { .. } | Self::TooFewSamples { .. }
        )
    }
}

impl FangErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        if self.is_input_quality() {
            error_code::INPUT_QUALITY
        } else {
            error_code::DATA_ERROR
        }
    }
}
