//! Empirical distribution analysis.
//!
//! Draws samples from a distribution, approximates its cumulative
//! distribution function through empirical quantiles, and differentiates the
//! quantile curve to obtain a density estimate.

pub mod plot;

use clap::ValueEnum;
use rand::Rng;
use rand_distr::{Distribution as _, Normal, Uniform};
use std::error::Error;

/// Distributions the visualizer can sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Distribution {
    Normal,
    Uniform,
}

/// An x/y curve, shared by the quantile and density computations.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Draw `size` samples from the distribution at the given scale.
///
/// Normal samples come from N(0, scale); uniform samples from [0, scale).
pub fn sample<R: Rng + ?Sized>(
    dist: Distribution,
    size: usize,
    scale: f64,
    rng: &mut R,
) -> Result<Vec<f64>, Box<dyn Error>> {
    match dist {
        Distribution::Normal => {
            let normal = Normal::new(0.0, scale)?;
            Ok(normal.sample_iter(rng).take(size).collect())
        }
        Distribution::Uniform => {
            let uniform = Uniform::new(0.0, scale);
            Ok(uniform.sample_iter(rng).take(size).collect())
        }
    }
}

/// Linearly interpolated empirical quantile over a sorted slice.
///
/// `q` is clamped to [0, 1]; the slice must be non-empty and sorted.
pub fn empirical_quantile(sorted: &[f64], q: f64) -> f64 {
    let q = q.clamp(0.0, 1.0);
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let position = q * (n - 1) as f64;
    let lower = position.floor() as usize;
    if lower >= n - 1 {
        return sorted[n - 1];
    }
    let fraction = position - lower as f64;
    sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower])
}

/// Approximate the cumulative distribution function of the samples.
///
/// Returns the quantile values on x against probabilities 0..=1 (inclusive)
/// in `step` increments on y, so the curve reads as F(x) = p.
pub fn quantile_curve(samples: &[f64], step: f64) -> Curve {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut probs = Vec::new();
    let mut p = 0.0;
    while p <= 1.0 + step / 2.0 {
        probs.push(p.min(1.0));
        p += step;
    }

    let quantiles = probs
        .iter()
        .map(|&q| empirical_quantile(&sorted, q))
        .collect();

    Curve {
        x: quantiles,
        y: probs,
    }
}

/// Numerical gradient dy/dx over possibly non-uniform spacing.
///
/// Uses the second-order interior stencil and one-sided differences at the
/// edges. Inputs must have equal length >= 2.
pub fn gradient(y: &[f64], x: &[f64]) -> Vec<f64> {
    assert_eq!(y.len(), x.len(), "gradient inputs must have equal length");
    let n = y.len();
    assert!(n >= 2, "gradient needs at least two points");

    let mut out = Vec::with_capacity(n);
    out.push((y[1] - y[0]) / (x[1] - x[0]));

    for i in 1..n - 1 {
        let hs = x[i] - x[i - 1];
        let hd = x[i + 1] - x[i];
        out.push(
            (hs * hs * y[i + 1] + (hd * hd - hs * hs) * y[i] - hd * hd * y[i - 1])
                / (hs * hd * (hd + hs)),
        );
    }

    out.push((y[n - 1] - y[n - 2]) / (x[n - 1] - x[n - 2]));
    out
}

/// Differentiate a CDF curve into a density estimate.
pub fn density_curve(cdf: &Curve) -> Curve {
    Curve {
        x: cdf.x.clone(),
        y: gradient(&cdf.y, &cdf.x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_sample_counts() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let samples = sample(Distribution::Normal, 1000, 1.0, &mut rng).unwrap();
        assert_eq!(samples.len(), 1000);
    }

    #[test]
    fn test_uniform_samples_stay_in_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let samples = sample(Distribution::Uniform, 1000, 2.0, &mut rng).unwrap();
        assert!(samples.iter().all(|&v| (0.0..2.0).contains(&v)));
    }

    #[test]
    fn test_invalid_normal_scale_is_an_error() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        assert!(sample(Distribution::Normal, 10, -1.0, &mut rng).is_err());
    }

    #[test]
    fn test_empirical_quantile_endpoints() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(empirical_quantile(&sorted, 0.0), 1.0);
        assert_eq!(empirical_quantile(&sorted, 1.0), 5.0);
    }

    #[test]
    fn test_empirical_quantile_interpolates() {
        let sorted = [0.0, 10.0];
        assert!((empirical_quantile(&sorted, 0.5) - 5.0).abs() < 1e-12);

        // Median of five evenly spaced values is the middle one
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(empirical_quantile(&sorted, 0.5), 3.0);
    }

    #[test]
    fn test_empirical_quantile_clamps() {
        let sorted = [1.0, 2.0];
        assert_eq!(empirical_quantile(&sorted, -0.5), 1.0);
        assert_eq!(empirical_quantile(&sorted, 1.5), 2.0);
    }

    #[test]
    fn test_quantile_curve_covers_unit_interval() {
        let samples: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let curve = quantile_curve(&samples, 0.25);
        assert_eq!(curve.y, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(curve.x.len(), curve.y.len());
        assert_eq!(curve.x[0], 0.0);
        assert_eq!(curve.x[4], 99.0);
    }

    #[test]
    fn test_quantile_curve_of_uniform_ramp_is_linear() {
        // Quantiles of 0..1000 should land close to the identity line
        let samples: Vec<f64> = (0..=1000).map(|i| i as f64 / 1000.0).collect();
        let curve = quantile_curve(&samples, 0.1);
        for (x, y) in curve.x.iter().zip(curve.y.iter()) {
            assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_gradient_of_linear_ramp_is_constant() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v + 1.0).collect();
        for d in gradient(&y, &x) {
            assert!((d - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gradient_nonuniform_spacing() {
        // y = x^2 sampled unevenly; interior stencil is exact for quadratics
        let x = [0.0, 1.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v| v * v).collect();
        let g = gradient(&y, &x);
        assert!((g[1] - 2.0).abs() < 1e-12);
        assert!((g[2] - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_density_curve_of_uniform_cdf_is_flat() {
        // CDF of U(0,1) is F(x) = x, so the density should be ~1 everywhere
        let xs: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        let cdf = Curve {
            x: xs.clone(),
            y: xs,
        };
        let density = density_curve(&cdf);
        for d in density.y {
            assert!((d - 1.0).abs() < 1e-9);
        }
    }
}
