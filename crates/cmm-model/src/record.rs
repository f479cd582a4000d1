//! The per-request input record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single scalar collected for one covariate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CovariateValue {
    Number(f64),
    /// Raw categorical text; encoded to its code by the inference adapter.
    Text(String),
}

/// Covariate values for one prediction request.
///
/// Created fresh on every submit and discarded after rendering; the record
/// itself performs no range validation (the form controls clamp input by
/// construction).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    values: BTreeMap<String, CovariateValue>,
}

impl InputRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: CovariateValue) {
        self.values.insert(name.into(), value);
    }

    pub fn set_number(&mut self, name: impl Into<String>, value: f64) {
        self.set(name, CovariateValue::Number(value));
    }

    pub fn set_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.set(name, CovariateValue::Text(value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&CovariateValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
