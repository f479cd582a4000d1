//! The render-ready incidence chart model.
//!
//! The reporter produces chart data; drawing belongs to whichever surface
//! hosts the pipeline. The y-range is pinned to [0, 1] so the curve keeps
//! its probability framing no matter how flat it is.

use anyhow::Result;

use cmm_survival::StepFunction;

use crate::summary::{REPORT_HORIZONS, format_percent};

pub const CHART_TITLE: &str = "Cumulative Incidence Curve";
pub const X_AXIS_LABEL: &str = "Time (years)";
pub const Y_AXIS_LABEL: &str = "Cumulative incidence probability";

/// Fixed y-range, regardless of the data extent.
pub const CHART_Y_RANGE: (f64, f64) = (0.0, 1.0);

/// Where a marker's annotation sits relative to the marker itself.
pub const MARKER_LABEL_OFFSET: (f64, f64) = (0.5, 0.05);

/// A highlighted report horizon on the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonMarker {
    pub years: f64,
    pub incidence: f64,
    /// Annotation text, e.g. `23.4%`.
    pub label: String,
    /// Annotation position, offset from the marker; an indicator connects
    /// the two.
    pub label_at: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// The curve's native grid, transformed to cumulative incidence.
    pub points: Vec<(f64, f64)>,
    pub markers: Vec<HorizonMarker>,
    pub y_range: (f64, f64),
}

impl IncidenceChart {
    /// Largest time on the curve, for x-axis sizing.
    pub fn max_time(&self) -> f64 {
        self.points
            .last()
            .map(|(time, _)| *time)
            .unwrap_or_default()
    }
}

/// Build the chart for one survival curve: every native point transformed
/// by 1 − p, plus a labelled marker per report horizon.
pub fn incidence_chart(curve: &StepFunction) -> Result<IncidenceChart> {
    let points = curve
        .points()
        .map(|(time, survival)| (time, 1.0 - survival))
        .collect();

    let mut markers = Vec::with_capacity(REPORT_HORIZONS.len());
    for years in REPORT_HORIZONS {
        let years = f64::from(years);
        let incidence = 1.0 - curve.eval(years)?;
        markers.push(HorizonMarker {
            years,
            incidence,
            label: format_percent(incidence),
            label_at: (
                years + MARKER_LABEL_OFFSET.0,
                incidence + MARKER_LABEL_OFFSET.1,
            ),
        });
    }

    Ok(IncidenceChart {
        title: CHART_TITLE,
        x_label: X_AXIS_LABEL,
        y_label: Y_AXIS_LABEL,
        points,
        markers,
        y_range: CHART_Y_RANGE,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn y_range_is_always_the_unit_interval() {
        let shallow = StepFunction::new(vec![1.0, 10.0], vec![0.99, 0.97]).expect("curve");
        let chart = incidence_chart(&shallow).expect("chart");
        assert_eq!(chart.y_range, (0.0, 1.0));
    }

    #[test]
    fn points_are_the_native_grid_transformed() {
        let curve =
            StepFunction::new(vec![2.0, 4.0, 7.0, 9.0], vec![0.8, 0.7, 0.6, 0.5]).expect("curve");
        let chart = incidence_chart(&curve).expect("chart");

        assert_eq!(chart.points.len(), 4);
        assert_relative_eq!(chart.points[0].0, 2.0);
        assert_relative_eq!(chart.points[0].1, 0.2);
        assert_relative_eq!(chart.points[3].1, 0.5);
        assert_relative_eq!(chart.max_time(), 9.0);
    }

    #[test]
    fn markers_carry_offset_labels() {
        let curve =
            StepFunction::new(vec![2.0, 4.0, 7.0, 9.0], vec![0.8, 0.7, 0.6, 0.5]).expect("curve");
        let chart = incidence_chart(&curve).expect("chart");

        assert_eq!(chart.markers.len(), 4);
        let first = &chart.markers[0];
        assert_relative_eq!(first.years, 2.0);
        assert_eq!(first.label, "20.0%");
        assert_relative_eq!(first.label_at.0, 2.5);
        assert_relative_eq!(first.label_at.1, 0.25);
    }

    #[test]
    fn certain_survival_gives_a_flat_curve_at_zero() {
        let curve = StepFunction::new(vec![1.0, 5.0, 10.0], vec![1.0, 1.0, 1.0]).expect("curve");
        let chart = incidence_chart(&curve).expect("chart");

        assert!(chart.points.iter().all(|(_, incidence)| *incidence == 0.0));
        assert!(chart.markers.iter().all(|marker| marker.incidence == 0.0));
    }
}
