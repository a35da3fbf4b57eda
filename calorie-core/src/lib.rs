pub mod calculations;
pub mod models;

pub use calculations::{CalorieEstimator, EstimateResult, EstimatorConfig, estimate};
pub use models::*;
