//! Common utility functions for calorie calculations.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Converts a decimal kilocalorie value to a whole number of kilocalories
/// by truncating toward zero.
///
/// This is integer conversion of the product, not rounding: `2070.9`
/// becomes `2070`, and `-183.3` becomes `-183`.
///
/// # Arguments
///
/// * `value` - The decimal kilocalorie value to truncate
///
/// # Returns
///
/// The whole-kilocalorie value, saturated at the `i64` range.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calorie_core::calculations::common::trunc_kcal;
///
/// assert_eq!(trunc_kcal(dec!(2070.9)), 2070);
/// assert_eq!(trunc_kcal(dec!(1838.7)), 1838);
/// assert_eq!(trunc_kcal(dec!(-183.3)), -183); // Toward zero
/// ```
pub fn trunc_kcal(value: Decimal) -> i64 {
    let truncated = value.trunc();
    truncated.to_i64().unwrap_or(if truncated.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
