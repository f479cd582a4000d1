//! The prediction pipeline and its error boundary.

use std::sync::Arc;

use anyhow::{Context, Result, bail};

use cmm_model::InputRecord;
use cmm_survival::{StepFunction, SurvivalModel};

use crate::encode::encode_categoricals;
use crate::frame::build_input_frame;

/// Outcome of one pipeline run: the survival curve for the submitted
/// record.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub curve: StepFunction,
}

/// Table build → encode → predict, behind a single error boundary.
///
/// The model is injected once at startup and shared read-only across
/// requests; each `predict` call is one synchronous run to completion.
pub struct PredictionPipeline {
    model: Arc<dyn SurvivalModel>,
}

impl PredictionPipeline {
    pub fn new(model: Arc<dyn SurvivalModel>) -> Self {
        Self { model }
    }

    /// Run the full pipeline for one input record.
    ///
    /// Any failure — frame construction, encoding, or the model call —
    /// surfaces as a single error carrying the original cause; there is no
    /// retry and no partial result.
    pub fn predict(&self, record: &InputRecord) -> Result<Prediction> {
        let schema = self.model.feature_names();
        let mut frame =
            build_input_frame(record, schema).context("build the prediction table")?;
        encode_categoricals(&mut frame, self.model.as_ref())
            .context("encode categorical covariates")?;

        let mut curves = self
            .model
            .predict_survival_function(&frame)
            .context("predict the survival function")?;
        if curves.len() != 1 {
            bail!(
                "expected exactly one survival function for one row, got {}",
                curves.len()
            );
        }
        let curve = curves.remove(0);
        tracing::debug!(max_time = curve.max_time(), "prediction complete");
        Ok(Prediction { curve })
    }
}
