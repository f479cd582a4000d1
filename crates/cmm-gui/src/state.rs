//! Application state: the covariate form, the pipeline, and the last
//! prediction outcome.

use std::sync::Arc;

use anyhow::{Context, Result};

use cmm_core::PredictionPipeline;
use cmm_model::{CovariateKind, CovariateSpec, InputRecord, covariate_spec};
use cmm_report::{IncidenceChart, IncidenceSummary, incidence_chart, incidence_summary};
use cmm_survival::SurvivalModel;

/// Backing value of one form control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    /// Selected code of a binary combo box.
    Choice(i64),
    /// Current value of a clamped numeric control.
    Number(f64),
}

/// One covariate control, in schema position.
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: &'static CovariateSpec,
    pub value: FieldValue,
}

/// The form's controls, in the model's schema order.
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<FormField>,
}

impl FormState {
    /// Build the form for a model schema. Every schema feature must have a
    /// covariate spec; anything else cannot be collected and is a startup
    /// error.
    pub fn for_schema(schema: &[String]) -> Result<Self> {
        let mut fields = Vec::with_capacity(schema.len());
        for name in schema {
            let spec = covariate_spec(name).with_context(|| {
                format!("model expects covariate {name} but the form has no configuration for it")
            })?;
            let value = match spec.kind {
                CovariateKind::Binary { .. } => FieldValue::Choice(1),
                CovariateKind::Continuous { default, .. } => FieldValue::Number(default),
            };
            fields.push(FormField { spec, value });
        }
        Ok(Self { fields })
    }

    /// A fresh input record from the current control values.
    pub fn record(&self) -> InputRecord {
        let mut record = InputRecord::new();
        for field in &self.fields {
            let value = match field.value {
                FieldValue::Choice(code) => code as f64,
                FieldValue::Number(number) => number,
            };
            record.set_number(field.spec.name, value);
        }
        record
    }
}

/// Everything the results section renders for one successful prediction.
#[derive(Debug, Clone)]
pub struct PredictionView {
    pub summary: IncidenceSummary,
    pub chart: IncidenceChart,
}

/// Top-level application state.
pub struct AppState {
    pipeline: PredictionPipeline,
    pub form: FormState,
    /// Last successful prediction, if any.
    pub outcome: Option<PredictionView>,
    /// Inline error from the last failed prediction, if any.
    pub error: Option<String>,
}

impl AppState {
    pub fn new(model: Arc<dyn SurvivalModel>) -> Result<Self> {
        let form = FormState::for_schema(model.feature_names())?;
        Ok(Self {
            pipeline: PredictionPipeline::new(model),
            form,
            outcome: None,
            error: None,
        })
    }

    /// One synchronous pipeline run for the current form values.
    ///
    /// On failure the previous result is cleared: the page shows the error
    /// line and nothing else for that submission.
    pub fn run_prediction(&mut self) {
        let record = self.form.record();
        match self.predict_view(&record) {
            Ok(view) => {
                self.outcome = Some(view);
                self.error = None;
            }
            Err(err) => {
                tracing::error!("prediction failed: {err:#}");
                self.outcome = None;
                self.error = Some(format!("Prediction failed: {err:#}"));
            }
        }
    }

    fn predict_view(&self, record: &InputRecord) -> Result<PredictionView> {
        let prediction = self.pipeline.predict(record)?;
        let summary = incidence_summary(&prediction.curve)?;
        let chart = incidence_chart(&prediction.curve)?;
        Ok(PredictionView { summary, chart })
    }
}
