//! Chart output for the distribution visualizer.
//!
//! Draws multi-series line charts with the [`plotters`] crate and saves them
//! as fixed 1200x800 PNG files, one series per distribution scale.

use super::Curve;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Which function of the distribution is being plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlotKind {
    /// Cumulative distribution function
    Cdf,
    /// Probability density
    Pd,
}

impl PlotKind {
    pub fn title(self) -> &'static str {
        match self {
            PlotKind::Cdf => "Cumulative Distribution Function",
            PlotKind::Pd => "Probability Distribution",
        }
    }

    pub fn y_label(self) -> &'static str {
        match self {
            PlotKind::Cdf => "F(x)",
            PlotKind::Pd => "f(x)",
        }
    }
}

/// Compute the x and y axis ranges covering every finite point of the curves.
pub fn axis_ranges(curves: &[(f64, Curve)]) -> Result<(Range<f64>, Range<f64>), PlotError> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for (_, curve) in curves {
        for (&x, &y) in curve.x.iter().zip(curve.y.iter()) {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if x_min > x_max || y_min > y_max {
        return Err(PlotError::InvalidData(
            "no finite data points to plot".to_string(),
        ));
    }

    // Pad flat ranges so the chart area is never degenerate
    if x_min == x_max {
        x_min -= 0.5;
        x_max += 0.5;
    }
    if y_min == y_max {
        y_min -= 0.5;
        y_max += 0.5;
    }

    Ok((x_min..x_max, y_min..y_max))
}

/// Draw the curves as a line chart and save it as a PNG file.
///
/// Each `(scale, curve)` pair becomes one series with a `sd=<scale>` legend
/// entry.
pub fn plot_curves(
    curves: &[(f64, Curve)],
    kind: PlotKind,
    output_path: &Path,
) -> Result<(), PlotError> {
    let (x_range, y_range) = axis_ranges(curves)?;

    let root = BitMapBackend::new(output_path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(kind.title(), ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc(kind.y_label())
        .draw()
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    for (i, (scale, curve)) in curves.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let series = curve.x.iter().zip(curve.y.iter()).map(|(&x, &y)| (x, y));
        chart
            .draw_series(LineSeries::new(series, color.clone().stroke_width(2)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(format!("sd={}", scale))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.clone().stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Curve {
        let x: Vec<f64> = (0..=10).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| v / 10.0).collect();
        Curve { x, y }
    }

    #[test]
    fn test_plot_kind_labels() {
        assert_eq!(PlotKind::Cdf.title(), "Cumulative Distribution Function");
        assert_eq!(PlotKind::Cdf.y_label(), "F(x)");
        assert_eq!(PlotKind::Pd.title(), "Probability Distribution");
        assert_eq!(PlotKind::Pd.y_label(), "f(x)");
    }

    #[test]
    fn test_axis_ranges_cover_all_curves() {
        let a = Curve {
            x: vec![0.0, 1.0],
            y: vec![0.0, 1.0],
        };
        let b = Curve {
            x: vec![-2.0, 3.0],
            y: vec![0.5, 2.0],
        };
        let (xr, yr) = axis_ranges(&[(1.0, a), (2.0, b)]).unwrap();
        assert_eq!(xr, -2.0..3.0);
        assert_eq!(yr, 0.0..2.0);
    }

    #[test]
    fn test_axis_ranges_skip_non_finite() {
        let curve = Curve {
            x: vec![0.0, f64::NAN, 2.0],
            y: vec![1.0, f64::INFINITY, 3.0],
        };
        let (xr, yr) = axis_ranges(&[(1.0, curve)]).unwrap();
        assert_eq!(xr, 0.0..2.0);
        assert_eq!(yr, 1.0..3.0);
    }

    #[test]
    fn test_axis_ranges_pad_degenerate() {
        let curve = Curve {
            x: vec![5.0, 5.0],
            y: vec![1.0, 1.0],
        };
        let (xr, yr) = axis_ranges(&[(1.0, curve)]).unwrap();
        assert_eq!(xr, 4.5..5.5);
        assert_eq!(yr, 0.5..1.5);
    }

    #[test]
    fn test_axis_ranges_empty_is_invalid() {
        let err = axis_ranges(&[]).unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
    }

    #[test]
    fn test_ramp_curve_is_monotonic() {
        let curve = ramp();
        let (xr, yr) = axis_ranges(&[(1.0, curve)]).unwrap();
        assert_eq!(xr, 0.0..10.0);
        assert_eq!(yr, 0.0..1.0);
    }
}
