//! Covariate definitions shared by the input form and the feature table.
//!
//! The nine covariates mirror what the bundled model was trained on. Their
//! order here is the training order; the artifact's schema is checked
//! against it at startup.

/// How a covariate is entered and constrained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CovariateKind {
    /// Closed {0, 1} domain with a display label per code.
    Binary {
        /// Display labels indexed by code.
        labels: [&'static str; 2],
    },
    /// Closed numeric range entered through a clamped control.
    Continuous {
        min: f64,
        max: f64,
        default: f64,
        step: f64,
    },
}

/// A single covariate the model expects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CovariateSpec {
    /// Feature name as it appears in the model schema.
    pub name: &'static str,
    /// Human-readable label shown on the form, including units.
    pub label: &'static str,
    pub kind: CovariateKind,
}

impl CovariateSpec {
    pub fn is_binary(&self) -> bool {
        matches!(self.kind, CovariateKind::Binary { .. })
    }

    /// Initial value for the form control: code 1 for binary covariates
    /// (Yes / Male), the configured default otherwise.
    pub fn default_value(&self) -> f64 {
        match self.kind {
            CovariateKind::Binary { .. } => 1.0,
            CovariateKind::Continuous { default, .. } => default,
        }
    }

    /// Display label for a binary code, if this covariate is binary and
    /// the code is in domain.
    pub fn binary_label(&self, code: i64) -> Option<&'static str> {
        match self.kind {
            CovariateKind::Binary { labels } => match code {
                0 => Some(labels[0]),
                1 => Some(labels[1]),
                _ => None,
            },
            CovariateKind::Continuous { .. } => None,
        }
    }
}

const YES_NO: [&str; 2] = ["No", "Yes"];

const INPUT_COVARIATES: [CovariateSpec; 9] = [
    CovariateSpec {
        name: "Hypertension",
        label: "Hypertension",
        kind: CovariateKind::Binary { labels: YES_NO },
    },
    CovariateSpec {
        name: "Memory problem",
        label: "Memory problem",
        kind: CovariateKind::Binary { labels: YES_NO },
    },
    CovariateSpec {
        name: "Age",
        label: "Age(years)",
        kind: CovariateKind::Continuous {
            min: 50.0,
            max: 150.0,
            default: 60.0,
            step: 1.0,
        },
    },
    CovariateSpec {
        name: "Gender",
        label: "Gender",
        kind: CovariateKind::Binary {
            labels: ["Female", "Male"],
        },
    },
    CovariateSpec {
        name: "Weight",
        label: "Weight(kg)",
        kind: CovariateKind::Continuous {
            min: 20.0,
            max: 200.0,
            default: 60.0,
            step: 0.1,
        },
    },
    CovariateSpec {
        name: "WC",
        label: "Waist circumference(cm)",
        kind: CovariateKind::Continuous {
            min: 20.0,
            max: 150.0,
            default: 80.0,
            step: 0.1,
        },
    },
    CovariateSpec {
        name: "HDL-C",
        label: "HDL-C(mg/dL)",
        kind: CovariateKind::Continuous {
            min: 30.0,
            max: 200.0,
            default: 70.0,
            step: 0.1,
        },
    },
    CovariateSpec {
        name: "FBG",
        label: "FBG(mg/dL)",
        kind: CovariateKind::Continuous {
            min: 50.0,
            max: 200.0,
            default: 110.0,
            step: 0.1,
        },
    },
    CovariateSpec {
        name: "HbA1c",
        label: "HbA1c(%)",
        kind: CovariateKind::Continuous {
            min: 3.0,
            max: 20.0,
            default: 5.0,
            step: 0.1,
        },
    },
];

/// All covariates the form renders, in training order.
pub fn input_covariates() -> &'static [CovariateSpec] {
    &INPUT_COVARIATES
}

/// Look up a covariate spec by model feature name.
pub fn covariate_spec(name: &str) -> Option<&'static CovariateSpec> {
    INPUT_COVARIATES.iter().find(|spec| spec.name == name)
}
