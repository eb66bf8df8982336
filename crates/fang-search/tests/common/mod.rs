//! Seeded synthetic data shared by the integration tests and the bench.

#![allow(dead_code)]

use fang_core::DataSet;

/// SplitMix64. Small, fast and fully reproducible across platforms.
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform on `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Exponential(1): strongly right-skewed.
    pub fn exponential(&mut self) -> f64 {
        -(1.0 - self.uniform()).ln()
    }

    /// Uniform on `[-1, 1)`.
    pub fn symmetric(&mut self) -> f64 {
        2.0 * self.uniform() - 1.0
    }
}

fn from_columns(names: &[&str], columns: Vec<Vec<f64>>) -> DataSet {
    let rows: Vec<Vec<f64>> = (0..columns[0].len())
        .map(|k| columns.iter().map(|col| col[k]).collect())
        .collect();
    DataSet::from_rows(names, &rows).unwrap()
}

/// `A → B → C` with exponential noise and coefficient 0.8 on each edge.
pub fn chain(seed: u64, n: usize) -> DataSet {
    let columns = chain_columns(seed, n);
    from_columns(&["A", "B", "C"], columns)
}

/// Columns of [`chain`] in `A, B, C` order.
pub fn chain_columns(seed: u64, n: usize) -> Vec<Vec<f64>> {
    let mut rng = SplitMix64::new(seed);
    let (mut a, mut b, mut c) = (Vec::new(), Vec::new(), Vec::new());
    for _ in 0..n {
        let va = rng.exponential();
        let vb = 0.8 * va + rng.exponential();
        let vc = 0.8 * vb + rng.exponential();
        a.push(va);
        b.push(vb);
        c.push(vc);
    }
    vec![a, b, c]
}

/// The chain with its columns reordered; `order` indexes `A, B, C`.
pub fn chain_permuted(seed: u64, n: usize, order: [usize; 3]) -> DataSet {
    let columns = chain_columns(seed, n);
    let names = ["A", "B", "C"];
    from_columns(
        &order.map(|i| names[i]),
        order.iter().map(|&i| columns[i].clone()).collect(),
    )
}

/// `X` independent of everything, `Y → Z`.
pub fn independent_x(seed: u64, n: usize) -> DataSet {
    let mut rng = SplitMix64::new(seed);
    let (mut x, mut y, mut z) = (Vec::new(), Vec::new(), Vec::new());
    for _ in 0..n {
        let vx = rng.exponential();
        let vy = rng.exponential();
        let vz = 0.8 * vy + rng.exponential();
        x.push(vx);
        y.push(vy);
        z.push(vz);
    }
    from_columns(&["X", "Y", "Z"], vec![x, y, z])
}

/// Equilibrium of the feedback pair `X = a Y + e1`, `Y = b X + e2` with
/// left-skewed noise of different shapes.
pub fn feedback_pair(seed: u64, n: usize, a: f64, b: f64) -> DataSet {
    let mut rng = SplitMix64::new(seed);
    let d = 1.0 - a * b;
    let (mut x, mut y) = (Vec::new(), Vec::new());
    for _ in 0..n {
        let e1 = -rng.exponential();
        let e2 = -rng.exponential().powi(2);
        x.push((e1 + a * e2) / d);
        y.push((b * e1 + e2) / d);
    }
    from_columns(&["X", "Y"], vec![x, y])
}

/// `p` variables, each a noisy mix of the earlier ones, for property tests
/// and the bench.
pub fn random_linear(seed: u64, n: usize, p: usize) -> DataSet {
    let mut rng = SplitMix64::new(seed);
    let weights: Vec<Vec<f64>> = (0..p)
        .map(|i| {
            (0..i)
                .map(|_| if rng.uniform() < 0.5 { 0.0 } else { rng.symmetric() })
                .collect()
        })
        .collect();
    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(n); p];
    for _ in 0..n {
        let mut row = vec![0.0; p];
        for i in 0..p {
            let parents: f64 = (0..i).map(|j| weights[i][j] * row[j]).sum();
            row[i] = parents + rng.exponential();
            columns[i].push(row[i]);
        }
    }
    let names: Vec<String> = (0..p).map(|i| format!("V{i}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    from_columns(&names, columns)
}
