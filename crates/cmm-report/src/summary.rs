//! The horizon summary: cumulative incidence at the fixed report years.

use anyhow::Result;

use cmm_survival::StepFunction;

/// Report horizons in years, in display order.
pub const REPORT_HORIZONS: [u32; 4] = [2, 4, 7, 9];

/// One-decimal percentage, e.g. `23.4%`.
pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Cumulative incidence at a single horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonIncidence {
    pub years: u32,
    pub incidence: f64,
}

impl HorizonIncidence {
    pub fn percent_label(&self) -> String {
        format_percent(self.incidence)
    }

    /// The summary line shown for this horizon.
    pub fn summary_line(&self) -> String {
        format!(
            "{}-year incidence probability: {}",
            self.years,
            self.percent_label()
        )
    }
}

/// Cumulative incidence at every report horizon, in horizon order.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceSummary {
    pub rows: Vec<HorizonIncidence>,
}

/// Incidence is 1 − survival at each horizon; a horizon outside the
/// curve's domain propagates as an error.
pub fn incidence_summary(curve: &StepFunction) -> Result<IncidenceSummary> {
    let mut rows = Vec::with_capacity(REPORT_HORIZONS.len());
    for years in REPORT_HORIZONS {
        let survival = curve.eval(f64::from(years))?;
        rows.push(HorizonIncidence {
            years,
            incidence: 1.0 - survival,
        });
    }
    Ok(IncidenceSummary { rows })
}
