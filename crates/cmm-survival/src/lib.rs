#![deny(unsafe_code)]

pub mod error;
pub mod forest;
pub mod model;
pub mod step;

pub use error::{Result, SurvivalError};
pub use forest::{SurvivalForest, SurvivalTree, TreeNode};
pub use model::{MODEL_FILE, SurvivalModel, default_model_path, load_default_model};
pub use step::StepFunction;
