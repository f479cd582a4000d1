//! The model seam the prediction pipeline is built against.

use std::collections::BTreeMap;
use std::path::PathBuf;

use polars::prelude::DataFrame;

use crate::error::Result;
use crate::forest::SurvivalForest;
use crate::step::StepFunction;

/// A pre-trained survival model: read-only once constructed, injected into
/// the pipeline at startup and shared across requests.
pub trait SurvivalModel: Send + Sync {
    /// The ordered feature schema the model was fit on.
    fn feature_names(&self) -> &[String];

    /// Persisted category→code mapping for a categorical feature, if any.
    fn category_codes(&self, feature: &str) -> Option<&BTreeMap<String, i64>>;

    /// One survival function per row of `frame`.
    fn predict_survival_function(&self, frame: &DataFrame) -> Result<Vec<StepFunction>>;
}

impl SurvivalModel for SurvivalForest {
    fn feature_names(&self) -> &[String] {
        SurvivalForest::feature_names(self)
    }

    fn category_codes(&self, feature: &str) -> Option<&BTreeMap<String, i64>> {
        SurvivalForest::category_codes(self, feature)
    }

    fn predict_survival_function(&self, frame: &DataFrame) -> Result<Vec<StepFunction>> {
        SurvivalForest::predict_survival_function(self, frame)
    }
}

pub const MODEL_FILE: &str = "survrf_model.json";

/// Location of the bundled artifact, relative to the workspace root.
pub fn default_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../model")
        .join(MODEL_FILE)
}

/// Load the bundled pre-trained forest.
pub fn load_default_model() -> Result<SurvivalForest> {
    SurvivalForest::from_file(&default_model_path())
}
