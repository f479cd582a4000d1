pub mod encode;
pub mod frame;
pub mod pipeline;

pub use encode::encode_categoricals;
pub use frame::build_input_frame;
pub use pipeline::{Prediction, PredictionPipeline};
