//! The pre-trained random survival forest artifact.
//!
//! The artifact carries everything prediction needs: the ordered feature
//! schema the forest was fit on, the category→code mappings persisted at
//! training time, the shared event-time grid, and the trees themselves.
//! Each tree is a flat node arena; leaves hold a survival curve over the
//! shared grid, and a row's prediction is the per-time average of the leaf
//! curves it reaches across all trees.

use std::collections::BTreeMap;
use std::path::Path;

use polars::prelude::{AnyValue, DataFrame};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SurvivalError};
use crate::step::StepFunction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    Split {
        /// Index into the feature schema.
        feature: usize,
        /// Rows with `value <= threshold` descend left.
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        /// Survival probabilities over the forest's time grid.
        survival: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivalTree {
    pub nodes: Vec<TreeNode>,
}

impl SurvivalTree {
    /// Route a feature row from the root to its leaf curve.
    fn leaf_survival(&self, row: &[f64]) -> Result<&[f64]> {
        let mut index = 0;
        // A well-formed tree reaches a leaf in at most `nodes.len()` hops.
        for _ in 0..self.nodes.len() {
            match &self.nodes[index] {
                TreeNode::Leaf { survival } => return Ok(survival),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
        Err(SurvivalError::invalid("tree walk did not reach a leaf"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivalForest {
    feature_names: Vec<String>,
    /// Persisted category→code mappings for categorical features.
    #[serde(default)]
    categories: BTreeMap<String, BTreeMap<String, i64>>,
    /// Event-time grid shared by every leaf curve, in years.
    times: Vec<f64>,
    trees: Vec<SurvivalTree>,
}

impl SurvivalForest {
    /// Load and validate an artifact from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SurvivalError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let forest: Self =
            serde_json::from_str(&contents).map_err(|source| SurvivalError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        forest.validate()?;
        tracing::info!(
            path = %path.display(),
            features = forest.feature_names.len(),
            trees = forest.trees.len(),
            max_time = forest.times.last().copied().unwrap_or_default(),
            "loaded survival forest artifact"
        );
        Ok(forest)
    }

    /// Assemble a forest from already-parsed parts, validating it the same
    /// way `from_file` does. Mainly useful for stub models in tests.
    pub fn from_parts(
        feature_names: Vec<String>,
        categories: BTreeMap<String, BTreeMap<String, i64>>,
        times: Vec<f64>,
        trees: Vec<SurvivalTree>,
    ) -> Result<Self> {
        let forest = Self {
            feature_names,
            categories,
            times,
            trees,
        };
        forest.validate()?;
        Ok(forest)
    }

    fn validate(&self) -> Result<()> {
        if self.feature_names.is_empty() {
            return Err(SurvivalError::invalid("artifact has an empty feature schema"));
        }
        if self.times.is_empty()
            || self.times[0] < 0.0
            || self.times.windows(2).any(|pair| pair[0] >= pair[1])
        {
            return Err(SurvivalError::invalid(
                "event-time grid must be non-empty, non-negative, and strictly increasing",
            ));
        }
        if self.trees.is_empty() {
            return Err(SurvivalError::invalid("artifact holds no trees"));
        }
        for name in self.categories.keys() {
            if !self.feature_names.iter().any(|feature| feature == name) {
                return Err(SurvivalError::invalid(format!(
                    "category mapping for unknown feature {name}"
                )));
            }
        }
        for (tree_index, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(SurvivalError::invalid(format!(
                    "tree {tree_index} has no nodes"
                )));
            }
            for node in &tree.nodes {
                match node {
                    TreeNode::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        if *feature >= self.feature_names.len() {
                            return Err(SurvivalError::invalid(format!(
                                "tree {tree_index} splits on feature index {feature}, schema has {}",
                                self.feature_names.len()
                            )));
                        }
                        if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                            return Err(SurvivalError::invalid(format!(
                                "tree {tree_index} has a child index out of bounds"
                            )));
                        }
                    }
                    TreeNode::Leaf { survival } => {
                        if survival.len() != self.times.len() {
                            return Err(SurvivalError::invalid(format!(
                                "tree {tree_index} leaf curve has {} values for {} grid times",
                                survival.len(),
                                self.times.len()
                            )));
                        }
                        if survival.iter().any(|value| !(0.0..=1.0).contains(value)) {
                            return Err(SurvivalError::invalid(format!(
                                "tree {tree_index} leaf probabilities must lie in [0, 1]"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn category_codes(&self, feature: &str) -> Option<&BTreeMap<String, i64>> {
        self.categories.get(feature)
    }

    /// Predict one survival function per row of `frame`.
    ///
    /// The frame's column names and order must equal the feature schema;
    /// a mismatch fails here rather than silently misaligning features.
    pub fn predict_survival_function(&self, frame: &DataFrame) -> Result<Vec<StepFunction>> {
        let actual: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        if actual != self.feature_names {
            return Err(SurvivalError::SchemaMismatch {
                expected: self.feature_names.join(", "),
                actual: actual.join(", "),
            });
        }

        let mut curves = Vec::with_capacity(frame.height());
        let mut row = vec![0.0; self.feature_names.len()];
        for row_index in 0..frame.height() {
            for (slot, name) in row.iter_mut().zip(&self.feature_names) {
                let cell = frame.column(name.as_str())?.get(row_index)?;
                *slot = numeric_cell(&cell).ok_or_else(|| SurvivalError::NonNumericCell {
                    column: name.clone(),
                    row: row_index,
                })?;
            }

            let mut averaged = vec![0.0; self.times.len()];
            for tree in &self.trees {
                let survival = tree.leaf_survival(&row)?;
                for (total, value) in averaged.iter_mut().zip(survival) {
                    *total += value;
                }
            }
            let tree_count = self.trees.len() as f64;
            for value in &mut averaged {
                *value /= tree_count;
            }
            curves.push(StepFunction::new(self.times.clone(), averaged)?);
        }
        Ok(curves)
    }
}

fn numeric_cell(value: &AnyValue) -> Option<f64> {
    match value {
        AnyValue::Float64(v) => Some(*v),
        AnyValue::Float32(v) => Some(f64::from(*v)),
        AnyValue::Int64(v) => Some(*v as f64),
        AnyValue::Int32(v) => Some(f64::from(*v)),
        AnyValue::Int16(v) => Some(f64::from(*v)),
        AnyValue::Int8(v) => Some(f64::from(*v)),
        AnyValue::UInt64(v) => Some(*v as f64),
        AnyValue::UInt32(v) => Some(f64::from(*v)),
        AnyValue::Boolean(v) => Some(f64::from(u8::from(*v))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use polars::prelude::{Column, DataFrame};

    use super::*;

    fn two_tree_forest() -> SurvivalForest {
        let split_tree = SurvivalTree {
            nodes: vec![
                TreeNode::Split {
                    feature: 0,
                    threshold: 0.5,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf {
                    survival: vec![1.0, 0.9],
                },
                TreeNode::Leaf {
                    survival: vec![0.8, 0.6],
                },
            ],
        };
        let flat_tree = SurvivalTree {
            nodes: vec![TreeNode::Leaf {
                survival: vec![0.9, 0.7],
            }],
        };
        SurvivalForest::from_parts(
            vec!["Flag".to_string(), "Age".to_string()],
            BTreeMap::new(),
            vec![1.0, 2.0],
            vec![split_tree, flat_tree],
        )
        .expect("valid forest")
    }

    fn frame(flag: f64, age: f64) -> DataFrame {
        DataFrame::new(vec![
            Column::new("Flag".into(), [flag]),
            Column::new("Age".into(), [age]),
        ])
        .expect("frame")
    }

    #[test]
    fn averages_leaf_curves_across_trees() {
        let forest = two_tree_forest();

        let low = forest
            .predict_survival_function(&frame(0.0, 60.0))
            .expect("predict");
        assert_eq!(low.len(), 1);
        assert_relative_eq!(low[0].eval(1.0).unwrap(), (1.0 + 0.9) / 2.0);
        assert_relative_eq!(low[0].eval(2.0).unwrap(), (0.9 + 0.7) / 2.0);

        let high = forest
            .predict_survival_function(&frame(1.0, 60.0))
            .expect("predict");
        assert_relative_eq!(high[0].eval(1.0).unwrap(), (0.8 + 0.9) / 2.0);
        assert_relative_eq!(high[0].eval(2.0).unwrap(), (0.6 + 0.7) / 2.0);
    }

    #[test]
    fn rejects_reordered_columns() {
        let forest = two_tree_forest();
        let swapped = DataFrame::new(vec![
            Column::new("Age".into(), [60.0]),
            Column::new("Flag".into(), [0.0]),
        ])
        .expect("frame");

        let err = forest.predict_survival_function(&swapped).unwrap_err();
        assert!(matches!(err, SurvivalError::SchemaMismatch { .. }));
    }

    #[test]
    fn rejects_textual_cells() {
        let forest = two_tree_forest();
        let textual = DataFrame::new(vec![
            Column::new("Flag".into(), ["yes"]),
            Column::new("Age".into(), [60.0]),
        ])
        .expect("frame");

        let err = forest.predict_survival_function(&textual).unwrap_err();
        assert!(matches!(err, SurvivalError::NonNumericCell { .. }));
    }

    #[test]
    fn validation_catches_out_of_range_split() {
        let bad = SurvivalForest::from_parts(
            vec!["Flag".to_string()],
            BTreeMap::new(),
            vec![1.0],
            vec![SurvivalTree {
                nodes: vec![TreeNode::Split {
                    feature: 3,
                    threshold: 0.5,
                    left: 0,
                    right: 0,
                }],
            }],
        );
        assert!(bad.is_err());
    }

    #[test]
    fn validation_catches_leaf_grid_mismatch() {
        let bad = SurvivalForest::from_parts(
            vec!["Flag".to_string()],
            BTreeMap::new(),
            vec![1.0, 2.0],
            vec![SurvivalTree {
                nodes: vec![TreeNode::Leaf {
                    survival: vec![0.9],
                }],
            }],
        );
        assert!(bad.is_err());
    }
}
