//! Daily calorie estimation.
//!
//! This module implements the closed-form estimate behind the CALCULATE
//! action: a linear base metabolic estimate in body weight, scaled by an
//! activity-intensity multiplier and truncated to whole kilocalories.
//!
//! # Formula
//!
//! | Gender | Estimate |
//! |--------|----------|
//! | Male   | trunc((879 + 10.2 × weight_kg) × intensity) |
//! | Female | trunc((795 + 7.18 × weight_kg) × intensity) |
//!
//! Truncation is toward zero (integer conversion of the product), not
//! rounding. There are no error conditions: any integer weight (zero and
//! negative included, since weight parsing coerces failures to zero) and
//! any intensity multiplier produce a defined result.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calorie_core::{Gender, estimate};
//!
//! // 70 kg male at the Light multiplier:
//! // (879 + 10.2 * 70) * 1.3 = 1593 * 1.3 = 2070.9 -> 2070
//! assert_eq!(estimate(Gender::Male, 70, dec!(1.3)), 2070);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::trunc_kcal;
use crate::models::Gender;

/// Coefficients of the calorie formula.
///
/// Each gender selects a base term and a per-kilogram slope; the defaults
/// are the published coefficients of the estimate.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use calorie_core::EstimatorConfig;
///
/// let config = EstimatorConfig::default();
///
/// assert_eq!(config.male_base, dec!(879));
/// assert_eq!(config.female_per_kg, dec!(7.18));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Base term of the male estimate (879 kcal).
    pub male_base: Decimal,

    /// Per-kilogram slope of the male estimate (10.2 kcal/kg).
    pub male_per_kg: Decimal,

    /// Base term of the female estimate (795 kcal).
    pub female_base: Decimal,

    /// Per-kilogram slope of the female estimate (7.18 kcal/kg).
    pub female_per_kg: Decimal,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            male_base: Decimal::from(879),
            male_per_kg: Decimal::new(102, 1),
            female_base: Decimal::from(795),
            female_per_kg: Decimal::new(718, 2),
        }
    }
}

impl EstimatorConfig {
    /// Returns the (base, per-kilogram) coefficient pair for a gender.
    fn coefficients(&self, gender: Gender) -> (Decimal, Decimal) {
        match gender {
            Gender::Male => (self.male_base, self.male_per_kg),
            Gender::Female => (self.female_base, self.female_per_kg),
        }
    }
}

/// Result of a calorie estimate.
///
/// Contains the final integer kilocalorie value along with the intermediate
/// terms for transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// The linear term in weight before the intensity multiplier is applied
    /// (base + per_kg × weight).
    pub base_estimate: Decimal,

    /// The base metabolic estimate scaled by the intensity multiplier,
    /// before truncation.
    pub scaled_estimate: Decimal,

    /// Final daily estimate in whole kilocalories, truncated toward zero.
    pub calories: i64,
}

impl std::fmt::Display for EstimateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Calories: {} kcal", self.calories)
    }
}

/// Calculator for the daily calorie estimate.
///
/// Encapsulates the formula coefficients and produces an [`EstimateResult`]
/// for a (gender, weight, intensity) triple.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use calorie_core::{CalorieEstimator, Gender};
///
/// let estimator = CalorieEstimator::default();
/// let result = estimator.calculate(Gender::Female, 60, dec!(1.5));
///
/// assert_eq!(result.base_estimate, dec!(1225.8));
/// assert_eq!(result.calories, 1838);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalorieEstimator {
    config: EstimatorConfig,
}

impl CalorieEstimator {
    /// Creates an estimator with the given coefficients.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Calculates the daily calorie estimate.
    ///
    /// # Arguments
    ///
    /// * `gender` - Selects the coefficient pair
    /// * `weight_kg` - Body weight in whole kilograms
    /// * `intensity` - Activity multiplier applied to the base estimate
    ///
    /// # Returns
    ///
    /// An [`EstimateResult`] with the base estimate, the scaled estimate,
    /// and the truncated integer kilocalorie value. Never fails.
    pub fn calculate(
        &self,
        gender: Gender,
        weight_kg: i32,
        intensity: Decimal,
    ) -> EstimateResult {
        if weight_kg < 0 {
            warn!(weight_kg, "negative weight, estimate is nominal");
        }

        let (base, per_kg) = self.config.coefficients(gender);
        let base_estimate = base + per_kg * Decimal::from(weight_kg);
        let scaled_estimate = base_estimate * intensity;

        EstimateResult {
            base_estimate,
            scaled_estimate,
            calories: trunc_kcal(scaled_estimate),
        }
    }
}

/// Estimates daily kilocalories with the default coefficients.
///
/// Convenience wrapper over [`CalorieEstimator::calculate`] returning only
/// the final integer value.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calorie_core::{Gender, estimate};
///
/// assert_eq!(estimate(Gender::Male, 70, dec!(1.3)), 2070);
/// assert_eq!(estimate(Gender::Female, 60, dec!(1.5)), 1838);
/// ```
pub fn estimate(gender: Gender, weight_kg: i32, intensity: Decimal) -> i64 {
    CalorieEstimator::default()
        .calculate(gender, weight_kg, intensity)
        .calories
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::IntensityLevel;

    // =========================================================================
    // estimate tests
    // =========================================================================

    #[test]
    fn male_seventy_kg_light() {
        // (879 + 10.2 * 70) * 1.3 = 2070.9 -> 2070
        let result = estimate(Gender::Male, 70, dec!(1.3));

        assert_eq!(result, 2070);
    }

    #[test]
    fn female_sixty_kg_usual() {
        // (795 + 7.18 * 60) * 1.5 = 1838.7 -> 1838
        let result = estimate(Gender::Female, 60, dec!(1.5));

        assert_eq!(result, 1838);
    }

    #[test]
    fn male_zero_weight_reduces_to_base_times_intensity() {
        for level in IntensityLevel::all() {
            let expected = trunc_kcal(dec!(879) * level.multiplier());

            assert_eq!(estimate(Gender::Male, 0, level.multiplier()), expected);
        }
    }

    #[test]
    fn female_zero_weight_reduces_to_base_times_intensity() {
        for level in IntensityLevel::all() {
            let expected = trunc_kcal(dec!(795) * level.multiplier());

            assert_eq!(estimate(Gender::Female, 0, level.multiplier()), expected);
        }
    }

    #[test]
    fn product_is_truncated_not_rounded() {
        // 2070.9 truncates to 2070 rather than rounding to 2071.
        let result = estimate(Gender::Male, 70, dec!(1.3));

        assert_eq!(result, 2070);
    }

    #[test]
    fn negative_weight_yields_defined_result() {
        // (879 + 10.2 * -100) * 1.3 = -141 * 1.3 = -183.3 -> -183
        let result = estimate(Gender::Male, -100, dec!(1.3));

        assert_eq!(result, -183);
    }

    // =========================================================================
    // CalorieEstimator tests
    // =========================================================================

    #[test]
    fn calculate_exposes_intermediate_values() {
        let estimator = CalorieEstimator::default();

        let result = estimator.calculate(Gender::Male, 70, dec!(1.3));

        assert_eq!(result.base_estimate, dec!(1593.0));
        assert_eq!(result.scaled_estimate, dec!(2070.90));
        assert_eq!(result.calories, 2070);
    }

    #[test]
    fn calculate_honors_custom_coefficients() {
        let estimator = CalorieEstimator::new(EstimatorConfig {
            male_base: dec!(1000),
            male_per_kg: dec!(10),
            female_base: dec!(900),
            female_per_kg: dec!(9),
        });

        let result = estimator.calculate(Gender::Female, 100, dec!(2.0));

        assert_eq!(result.calories, 3600);
    }

    #[test]
    fn result_displays_as_calorie_line() {
        let result = CalorieEstimator::default().calculate(Gender::Male, 70, dec!(1.3));

        assert_eq!(result.to_string(), "Calories: 2070 kcal");
    }
}
