pub mod covariate;
pub mod record;

pub use covariate::{CovariateKind, CovariateSpec, covariate_spec, input_covariates};
pub use record::{CovariateValue, InputRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_covers_all_nine_covariates_in_training_order() {
        let names: Vec<&str> = input_covariates().iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            [
                "Hypertension",
                "Memory problem",
                "Age",
                "Gender",
                "Weight",
                "WC",
                "HDL-C",
                "FBG",
                "HbA1c",
            ]
        );
    }

    #[test]
    fn binary_covariates_default_to_code_one() {
        for name in ["Hypertension", "Memory problem", "Gender"] {
            let spec = covariate_spec(name).expect("spec");
            assert!(spec.is_binary());
            assert_eq!(spec.default_value(), 1.0);
        }
    }

    #[test]
    fn gender_labels_map_codes_to_display_text() {
        let spec = covariate_spec("Gender").expect("spec");
        assert_eq!(spec.binary_label(0), Some("Female"));
        assert_eq!(spec.binary_label(1), Some("Male"));
        assert_eq!(spec.binary_label(2), None);
    }

    #[test]
    fn continuous_bounds_match_form_configuration() {
        let age = covariate_spec("Age").expect("spec");
        let CovariateKind::Continuous {
            min,
            max,
            default,
            step,
        } = age.kind
        else {
            panic!("Age must be continuous");
        };
        assert_eq!((min, max, default, step), (50.0, 150.0, 60.0, 1.0));
    }

    #[test]
    fn record_serializes() {
        let mut record = InputRecord::new();
        record.set_number("Age", 60.0);
        record.set_text("Gender", "Male");

        let json = serde_json::to_string(&record).expect("serialize record");
        let round: InputRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round.get("Age"), Some(&CovariateValue::Number(60.0)));
        assert_eq!(
            round.get("Gender"),
            Some(&CovariateValue::Text("Male".to_string()))
        );
    }
}
