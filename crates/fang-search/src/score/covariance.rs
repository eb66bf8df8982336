//! Sample covariance matrix and the residual variance of one variable
//! regressed on a set of others.

use fang_core::{DataSet, Node};
use nalgebra::{DMatrix, DVector};

#[derive(Debug, Clone)]
pub struct CovarianceMatrix {
    variables: Vec<Node>,
    matrix: DMatrix<f64>,
    sample_size: usize,
}

impl CovarianceMatrix {
    /// Unbiased (`n - 1`) covariance of every column pair.
    pub fn from_dataset(data: &DataSet) -> Self {
        let p = data.n_variables();
        let n = data.n_samples();
        let means: Vec<f64> = (0..p)
            .map(|i| data.column(i).iter().sum::<f64>() / n as f64)
            .collect();
        let denom = (n.max(2) - 1) as f64;

        let mut matrix = DMatrix::zeros(p, p);
        for i in 0..p {
            for j in i..p {
                let (ci, cj) = (data.column(i), data.column(j));
                let s: f64 = ci
                    .iter()
                    .zip(cj)
                    .map(|(a, b)| (a - means[i]) * (b - means[j]))
                    .sum();
                matrix[(i, j)] = s / denom;
                matrix[(j, i)] = s / denom;
            }
        }

        Self {
            variables: data.variables().to_vec(),
            matrix,
            sample_size: n,
        }
    }

    pub fn variables(&self) -> &[Node] {
        &self.variables
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn dimension(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix[(i, j)]
    }

    /// `Σ_ii - Σ_iP Σ_PP⁻¹ Σ_Pi`. `None` when `Σ_PP` cannot be solved.
    pub fn residual_variance(&self, node: usize, parents: &[usize]) -> Option<f64> {
        let var = self.matrix[(node, node)];
        if parents.is_empty() {
            return Some(var);
        }
        let k = parents.len();
        let sub = DMatrix::from_fn(k, k, |a, b| self.matrix[(parents[a], parents[b])]);
        let rhs = DVector::from_fn(k, |a, _| self.matrix[(parents[a], node)]);

        let beta = match sub.clone().cholesky() {
            Some(chol) => chol.solve(&rhs),
            None => sub.lu().solve(&rhs)?,
        };
        let explained = rhs.dot(&beta);
        let residual = var - explained;
        residual.is_finite().then_some(residual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> DataSet {
        DataSet::from_rows(
            &["a", "b", "c"],
            &[
                vec![1.0, 2.0, 0.5],
                vec![2.0, 4.1, -0.5],
                vec![3.0, 5.9, 1.5],
                vec![4.0, 8.2, 0.0],
                vec![5.0, 9.8, -1.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_diagonal_is_sample_variance() {
        let cov = CovarianceMatrix::from_dataset(&dataset());
        // a = 1..5: mean 3, sum of squares 10, n - 1 = 4
        assert!((cov.get(0, 0) - 2.5).abs() < 1e-12);
        assert_eq!(cov.get(0, 1), cov.get(1, 0));
        assert_eq!(cov.dimension(), 3);
        assert_eq!(cov.sample_size(), 5);
    }

    #[test]
    fn test_residual_variance_shrinks_with_good_predictor() {
        let cov = CovarianceMatrix::from_dataset(&dataset());
        let total = cov.residual_variance(1, &[]).unwrap();
        let given_a = cov.residual_variance(1, &[0]).unwrap();
        assert!(given_a < total * 0.05);
        assert!(given_a >= 0.0);
    }

    #[test]
    fn test_residual_variance_of_collinear_parents() {
        // b is an exact copy of a, so Σ_PP is singular.
        let data = DataSet::from_rows(
            &["a", "b", "c"],
            &[
                vec![1.0, 1.0, 0.3],
                vec![2.0, 2.0, 0.1],
                vec![3.0, 3.0, 0.9],
                vec![4.0, 4.0, 0.2],
            ],
        )
        .unwrap();
        let cov = CovarianceMatrix::from_dataset(&data);
        // Either unsolvable or a finite value; never a panic.
        if let Some(v) = cov.residual_variance(2, &[0, 1]) {
            assert!(v.is_finite());
        }
    }
}
