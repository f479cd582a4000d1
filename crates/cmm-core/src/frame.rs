//! Construction of the single-row feature table.

use anyhow::{Context, Result};
use polars::prelude::{Column, DataFrame};

use cmm_model::{CovariateValue, InputRecord};

/// Build the one-row prediction table whose columns are exactly `schema`,
/// in schema order.
///
/// Every schema feature must be present in the record; the frame is never
/// padded, so a missing covariate fails here instead of reaching the model
/// with misaligned columns.
pub fn build_input_frame(record: &InputRecord, schema: &[String]) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(schema.len());
    for name in schema {
        let value = record
            .get(name)
            .with_context(|| format!("covariate {name} missing from the input record"))?;
        let column = match value {
            CovariateValue::Number(number) => Column::new(name.as_str().into(), [*number]),
            CovariateValue::Text(text) => Column::new(name.as_str().into(), [text.as_str()]),
        };
        columns.push(column);
    }
    DataFrame::new(columns).context("assemble the input frame")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> InputRecord {
        let mut record = InputRecord::new();
        record.set_number("Age", 60.0);
        record.set_number("FBG", 110.0);
        record.set_text("Gender", "Male");
        record
    }

    #[test]
    fn columns_follow_schema_order() {
        let schema = ["FBG", "Age", "Gender"].map(String::from);
        let frame = build_input_frame(&record(), &schema).expect("frame");

        let names: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, schema);
        assert_eq!(frame.height(), 1);
    }

    #[test]
    fn missing_covariate_is_an_error() {
        let schema = ["Age", "HbA1c"].map(String::from);
        let err = build_input_frame(&record(), &schema).unwrap_err();
        assert!(err.to_string().contains("HbA1c"));
    }
}
