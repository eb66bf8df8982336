//! Pearson correlation restricted to one tail of either variable.
//!
//! Moments are accumulated with an `n` divisor over the selected samples.
//! A subset with fewer than two samples or no spread has no correlation;
//! that is reported as `None` instead of a NaN.

use std::fmt;

/// Variance at or below this fraction of the second moment counts as zero,
/// so a constant subset is not rescued by summation rounding.
const RELATIVE_VARIANCE_FLOOR: f64 = 1e-12;

/// Which samples of a standardized pair `(x, y)` enter the moments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TailCondition {
    All,
    /// `x > 0`
    XPositive,
    /// `y > 0`
    YPositive,
    /// `x < 0`
    XNegative,
    /// `y < 0`
    YNegative,
}

impl TailCondition {
    #[inline]
    pub fn admits(&self, x: f64, y: f64) -> bool {
        match self {
            Self::All => true,
            Self::XPositive => x > 0.0,
            Self::YPositive => y > 0.0,
            Self::XNegative => x < 0.0,
            Self::YNegative => y < 0.0,
        }
    }

    /// Human-readable form naming the actual variables.
    pub fn describe(&self, x: &str, y: &str) -> String {
        match self {
            Self::All => "all samples".to_string(),
            Self::XPositive => format!("{x} > 0"),
            Self::YPositive => format!("{y} > 0"),
            Self::XNegative => format!("{x} < 0"),
            Self::YNegative => format!("{y} < 0"),
        }
    }
}

impl fmt::Display for TailCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe("x", "y"))
    }
}

/// First and second moments of the samples admitted by a [`TailCondition`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TailMoments {
    pub n: usize,
    exy: f64,
    exx: f64,
    eyy: f64,
    ex: f64,
    ey: f64,
}

impl TailMoments {
    pub fn accumulate(x: &[f64], y: &[f64], condition: TailCondition) -> Self {
        let mut m = Self::default();
        for (&xk, &yk) in x.iter().zip(y) {
            if condition.admits(xk, yk) {
                m.exy += xk * yk;
                m.exx += xk * xk;
                m.eyy += yk * yk;
                m.ex += xk;
                m.ey += yk;
                m.n += 1;
            }
        }
        if m.n > 0 {
            let n = m.n as f64;
            m.exy /= n;
            m.exx /= n;
            m.eyy /= n;
            m.ex /= n;
            m.ey /= n;
        }
        m
    }

    pub fn correlation(&self) -> Option<f64> {
        if self.n < 2 {
            return None;
        }
        let vx = self.exx - self.ex * self.ex;
        let vy = self.eyy - self.ey * self.ey;
        if vx <= RELATIVE_VARIANCE_FLOOR * self.exx || vy <= RELATIVE_VARIANCE_FLOOR * self.eyy {
            return None;
        }
        let r = (self.exy - self.ex * self.ey) / (vx * vy).sqrt();
        r.is_finite().then_some(r)
    }
}

/// Pearson correlation of `x` and `y` over the samples admitted by `condition`.
pub fn tail_correlation(x: &[f64], y: &[f64], condition: TailCondition) -> Option<f64> {
    TailMoments::accumulate(x, y, condition).correlation()
}
