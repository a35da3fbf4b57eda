//! Calorie estimation logic.
//!
//! This module provides the closed-form daily calorie calculation applied
//! when the user presses CALCULATE, together with shared numeric helpers.

pub mod common;
pub mod estimator;

pub use estimator::{CalorieEstimator, EstimateResult, EstimatorConfig, estimate};
