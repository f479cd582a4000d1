//! Tests for the bundled pre-trained artifact.

use polars::prelude::{Column, DataFrame};

use cmm_survival::{SurvivalModel, load_default_model};

fn default_frame(names: &[String]) -> DataFrame {
    let defaults = [
        ("Hypertension", 1.0),
        ("Memory problem", 1.0),
        ("Age", 60.0),
        ("Gender", 1.0),
        ("Weight", 60.0),
        ("WC", 80.0),
        ("HDL-C", 70.0),
        ("FBG", 110.0),
        ("HbA1c", 5.0),
    ];
    let columns = names
        .iter()
        .map(|name| {
            let (_, value) = defaults
                .iter()
                .find(|(feature, _)| feature == name)
                .expect("known feature");
            Column::new(name.as_str().into(), [*value])
        })
        .collect();
    DataFrame::new(columns).expect("frame")
}

#[test]
fn bundled_artifact_loads_and_matches_the_form_schema() {
    let forest = load_default_model().expect("bundled artifact loads");

    let expected: Vec<&str> = cmm_model::input_covariates()
        .iter()
        .map(|spec| spec.name)
        .collect();
    let actual: Vec<&str> = forest
        .feature_names()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(actual, expected);

    for name in ["Hypertension", "Memory problem", "Gender"] {
        let codes = forest.category_codes(name).expect("category map");
        assert_eq!(codes.len(), 2);
    }
}

#[test]
fn default_inputs_predict_a_monotone_curve_within_bounds() {
    let forest = load_default_model().expect("bundled artifact loads");
    let frame = default_frame(forest.feature_names());

    let curves = forest.predict_survival_function(&frame).expect("predict");
    assert_eq!(curves.len(), 1);

    let probabilities = curves[0].probabilities();
    assert!(probabilities.iter().all(|p| (0.0..=1.0).contains(p)));
    assert!(
        probabilities
            .windows(2)
            .all(|pair| pair[1] <= pair[0] + 1e-12),
        "averaged survival curve must be non-increasing"
    );

    // The grid covers every report horizon.
    for horizon in [2.0, 4.0, 7.0, 9.0] {
        assert!(curves[0].eval(horizon).is_ok());
    }
}
