//! Right-continuous survival step functions.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SurvivalError};

/// A survival function sampled on the model's event-time grid.
///
/// The function is constant between consecutive grid times: for
/// `x[i] <= t < x[i + 1]` the survival probability is `y[i]`. Before the
/// first grid time no event has been observed, so survival is 1.0. Times
/// past the last grid time are outside the model's domain and evaluate to
/// an error rather than an extrapolated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepFunction {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl StepFunction {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.is_empty() || x.len() != y.len() {
            return Err(SurvivalError::invalid(format!(
                "step function needs matching non-empty grids (got {} times, {} values)",
                x.len(),
                y.len()
            )));
        }
        if x[0] < 0.0 || x.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(SurvivalError::invalid(
                "step function times must be non-negative and strictly increasing",
            ));
        }
        if y.iter().any(|value| !(0.0..=1.0).contains(value)) {
            return Err(SurvivalError::invalid(
                "survival probabilities must lie in [0, 1]",
            ));
        }
        Ok(Self { x, y })
    }

    /// Survival probability at `time`.
    pub fn eval(&self, time: f64) -> Result<f64> {
        let max = self.max_time();
        if !time.is_finite() || time < 0.0 || time > max {
            return Err(SurvivalError::OutOfDomain { time, max });
        }
        let steps_before = self.x.iter().take_while(|grid| **grid <= time).count();
        match steps_before {
            0 => Ok(1.0),
            n => Ok(self.y[n - 1]),
        }
    }

    /// The native `(time, survival)` pairs of the curve.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn times(&self) -> &[f64] {
        &self.x
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.y
    }

    pub fn max_time(&self) -> f64 {
        *self.x.last().expect("step function grids are non-empty")
    }
}
