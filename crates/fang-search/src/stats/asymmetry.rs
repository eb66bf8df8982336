//! Fisher-z comparison of a full correlation against a tail correlation.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Fisher z-transform, `atanh(r)`. Infinite at `r = ±1`.
#[inline]
pub fn fisher_z(r: f64) -> f64 {
    0.5 * ((1.0 + r).ln() - (1.0 - r).ln())
}

/// Difference of transformed correlations scaled by `sqrt(2 / n)`.
pub fn asymmetry_t(z_full: f64, z_tail: f64, n: usize) -> f64 {
    (z_full - z_tail) / (2.0 / n as f64).sqrt()
}

/// `1 - F(|t| / 2)` under a Student-t with `2n - 2` degrees of freedom.
///
/// `None` when `t` is not finite or the distribution cannot be built
/// (`n < 2`); callers treat that as insufficient evidence.
pub fn asymmetry_p_value(t: f64, n: usize) -> Option<f64> {
    if !t.is_finite() || n < 2 {
        return None;
    }
    let dof = (2 * n - 2) as f64;
    let dist = StudentsT::new(0.0, 1.0, dof).ok()?;
    let p = 1.0 - dist.cdf((t / 2.0).abs());
    p.is_finite().then_some(p)
}

/// Three-valued sign: `-1`, `0` or `1`. Zero maps to zero, unlike
/// [`f64::signum`].
#[inline]
pub fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fisher_z_is_atanh() {
        for r in [-0.9, -0.3, 0.0, 0.25, 0.8] {
            assert!((fisher_z(r) - f64::atanh(r)).abs() < 1e-12);
        }
        assert!(fisher_z(1.0).is_infinite());
    }

    #[test]
    fn test_equal_correlations_give_p_half() {
        let t = asymmetry_t(fisher_z(0.4), fisher_z(0.4), 500);
        assert_eq!(t, 0.0);
        let p = asymmetry_p_value(t, 500).unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_p_value_is_symmetric_in_t() {
        let a = asymmetry_p_value(3.0, 100).unwrap();
        let b = asymmetry_p_value(-3.0, 100).unwrap();
        assert!((a - b).abs() < 1e-15);
    }

    #[test]
    fn test_large_difference_is_significant() {
        let t = asymmetry_t(fisher_z(0.9), fisher_z(0.25), 2000);
        let p = asymmetry_p_value(t, 2000).unwrap();
        assert!(p < 1e-6, "p = {p}");
    }

    #[test]
    fn test_non_finite_t_has_no_p_value() {
        let t = asymmetry_t(fisher_z(1.0), fisher_z(0.2), 100);
        assert_eq!(asymmetry_p_value(t, 100), None);
        assert_eq!(asymmetry_p_value(f64::NAN, 100), None);
        assert_eq!(asymmetry_p_value(1.0, 1), None);
    }

    #[test]
    fn test_sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0);
        assert_eq!(sign(-0.0), 0);
        assert_eq!(sign(2.5), 1);
        assert_eq!(sign(-1e-300), -1);
    }
}
