//! Column-major continuous dataset with input-quality checks and standardization.

use rustc_hash::FxHashSet;

use super::Node;
use crate::errors::DataError;

/// Minimum samples for a sample standard deviation (`n - 1` divisor).
const MIN_SAMPLES: usize = 2;

/// An `n_samples × n_variables` matrix of real values, stored by column.
///
/// Every column has the same length. Variable order is the column order and
/// is preserved by every transformation.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    variables: Vec<Node>,
    columns: Vec<Vec<f64>>,
}

impl DataSet {
    /// Build a dataset from variables and their columns.
    ///
    /// Checks shape only (column count, equal lengths, unique names).
    /// Use [`DataSet::validate_quality`] for value checks.
    pub fn new(variables: Vec<Node>, columns: Vec<Vec<f64>>) -> Result<Self, DataError> {
        if variables.is_empty() {
            return Err(DataError::Empty);
        }
        if columns.len() != variables.len() {
            return Err(DataError::ColumnCountMismatch {
                expected: variables.len(),
                actual: columns.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for node in &variables {
            if !seen.insert(node.name()) {
                return Err(DataError::DuplicateVariable {
                    name: node.name().to_string(),
                });
            }
        }

        let expected = columns[0].len();
        for (node, column) in variables.iter().zip(&columns) {
            if column.len() != expected {
                return Err(DataError::RaggedColumn {
                    variable: node.name().to_string(),
                    expected,
                    actual: column.len(),
                });
            }
        }

        Ok(Self { variables, columns })
    }

    /// Build a dataset from row-major samples.
    pub fn from_rows<S: AsRef<str>>(names: &[S], rows: &[Vec<f64>]) -> Result<Self, DataError> {
        let variables: Vec<Node> = names.iter().map(|n| Node::new(n.as_ref())).collect();
        let mut columns = vec![Vec::with_capacity(rows.len()); variables.len()];
        for row in rows {
            if row.len() != variables.len() {
                return Err(DataError::ColumnCountMismatch {
                    expected: variables.len(),
                    actual: row.len(),
                });
            }
            for (column, &value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }
        Self::new(variables, columns)
    }

    pub fn variables(&self) -> &[Node] {
        &self.variables
    }

    pub fn variable(&self, index: usize) -> &Node {
        &self.variables[index]
    }

    pub fn column(&self, index: usize) -> &[f64] {
        &self.columns[index]
    }

    pub fn n_samples(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn n_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v.name() == name)
    }

    /// Reject data that would make standardization numerically meaningless:
    /// fewer than two samples, any non-finite value, or a constant column.
    pub fn validate_quality(&self) -> Result<(), DataError> {
        let n = self.n_samples();
        if n < MIN_SAMPLES {
            return Err(DataError::TooFewSamples {
                required: MIN_SAMPLES,
                actual: n,
            });
        }

        for (node, column) in self.variables.iter().zip(&self.columns) {
            if let Some((row, &value)) = column.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(DataError::NonFiniteValue {
                    variable: node.name().to_string(),
                    row,
                    value,
                });
            }
            let first = column[0];
            if column.iter().all(|&v| v == first) {
                return Err(DataError::ZeroVariance {
                    variable: node.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Return a copy with every column centered and scaled to unit sample variance.
    ///
    /// Input quality is checked first; a column whose scaled values come out
    /// non-finite (variance underflow) is reported as zero variance rather
    /// than passed on as NaN.
    pub fn standardize(&self) -> Result<DataSet, DataError> {
        self.validate_quality()?;

        let mut columns = Vec::with_capacity(self.columns.len());
        for (node, column) in self.variables.iter().zip(&self.columns) {
            let standardized = standardize_column(column);
            if standardized.iter().any(|v| !v.is_finite()) {
                return Err(DataError::ZeroVariance {
                    variable: node.name().to_string(),
                });
            }
            columns.push(standardized);
        }

        Ok(Self {
            variables: self.variables.clone(),
            columns,
        })
    }
}

/// Center a column and divide by its sample standard deviation (`n - 1` divisor).
///
/// A constant column yields non-finite values; callers are expected to
/// validate first.
pub fn standardize_column(data: &[f64]) -> Vec<f64> {
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let centered: Vec<f64> = data.iter().map(|v| v - mean).collect();
    let norm = (centered.iter().map(|v| v * v).sum::<f64>() / (n - 1.0)).sqrt();
    centered.into_iter().map(|v| v / norm).collect()
}
