//! Categorical encoding through the artifact's persisted mappings.
//!
//! Textual columns are mapped to the integer codes the model was trained
//! with. Unknown values fail; refitting an encoder on the one-row request
//! batch could never reproduce the training-time codes.

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, DataType, Series};

use cmm_survival::SurvivalModel;

/// Replace every textual column of `frame` with its integer codes.
pub fn encode_categoricals(frame: &mut DataFrame, model: &dyn SurvivalModel) -> Result<()> {
    let textual: Vec<String> = frame
        .get_columns()
        .iter()
        .filter(|column| column.dtype() == &DataType::String)
        .map(|column| column.name().to_string())
        .collect();

    for name in textual {
        let codes = model
            .category_codes(&name)
            .with_context(|| format!("no persisted category mapping for column {name}"))?;

        let values = frame
            .column(&name)
            .and_then(|column| column.str())
            .with_context(|| format!("read textual column {name}"))?;

        let mut encoded = Vec::with_capacity(values.len());
        for value in values {
            let value =
                value.with_context(|| format!("missing value in textual column {name}"))?;
            let code = codes
                .get(value)
                .with_context(|| format!("unknown category {value:?} for covariate {name}"))?;
            encoded.push(*code as f64);
        }

        tracing::debug!(column = %name, "encoded categorical column");
        frame
            .with_column(Series::new(name.as_str().into(), encoded))
            .with_context(|| format!("replace column {name} with its codes"))?;
    }
    Ok(())
}
