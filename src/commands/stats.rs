//! Distribution visualizer command.
//!
//! Samples a distribution at one or more scales, builds empirical CDF or
//! density curves, and saves a comparison chart.

use crate::logger::Logger;
use crate::stats::plot::{plot_curves, PlotKind};
use crate::stats::{density_curve, quantile_curve, sample, Curve, Distribution};
use std::error::Error;
use std::path::Path;

/// Sample every scale, build curves of the requested kind, and plot them.
pub fn run(
    dist: Distribution,
    size: usize,
    scales: &[f64],
    step: f64,
    kind: PlotKind,
    output: &Path,
) -> Result<(), Box<dyn Error>> {
    if size < 2 {
        return Err("Sample size must be at least 2".into());
    }
    if !(step > 0.0 && step <= 1.0) {
        return Err("Step must be in (0, 1]".into());
    }
    if scales.is_empty() {
        return Err("At least one scale is required".into());
    }
    if let Some(bad) = scales.iter().find(|s| **s <= 0.0) {
        return Err(format!("Scales must be positive, got {}", bad).into());
    }

    Logger::info(&format!(
        "Sampling {:?} distribution, {} samples per scale",
        dist, size
    ));

    let mut rng = rand::thread_rng();
    let mut curves: Vec<(f64, Curve)> = Vec::with_capacity(scales.len());

    for &scale in scales {
        let samples = sample(dist, size, scale, &mut rng)?;
        let cdf = quantile_curve(&samples, step);
        let curve = match kind {
            PlotKind::Cdf => cdf,
            PlotKind::Pd => density_curve(&cdf),
        };
        Logger::detail(&format!("scale {}: {} curve points", scale, curve.x.len()));
        curves.push((scale, curve));
    }

    plot_curves(&curves, kind, output)?;

    Logger::success(&format!("Saved {}", output.display()));
    Logger::stats("Series", &curves.len().to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_tiny_sample_size() {
        let err = run(
            Distribution::Normal,
            1,
            &[1.0],
            0.01,
            PlotKind::Cdf,
            Path::new("out.png"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_rejects_bad_step() {
        let err = run(
            Distribution::Normal,
            100,
            &[1.0],
            0.0,
            PlotKind::Cdf,
            Path::new("out.png"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Step"));
    }

    #[test]
    fn test_rejects_empty_scales() {
        let err = run(
            Distribution::Uniform,
            100,
            &[],
            0.01,
            PlotKind::Pd,
            Path::new("out.png"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("scale"));
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let err = run(
            Distribution::Uniform,
            100,
            &[1.0, -0.5],
            0.01,
            PlotKind::Pd,
            Path::new("out.png"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("positive"));
    }
}
