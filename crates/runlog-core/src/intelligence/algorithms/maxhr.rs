// ABOUTME: Age-predicted maximum heart rate estimate used until the user supplies one
// ABOUTME: Implements 207 - 0.7 x age with input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runlog Contributors

use crate::constants::heart_rate::{DEFAULT_ASSUMED_AGE, ESTIMATE_INTERCEPT, ESTIMATE_SLOPE};
use crate::errors::{AppError, AppResult};

/// Estimate maximum heart rate from age
///
/// Formula: `round(207 - 0.7 x age)`. This is only a starting point; the user
/// is expected to override it with a measured value.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if age is outside 1-120 years
///
/// # Example
///
/// ```rust
/// use runlog_core::intelligence::algorithms::estimate_max_hr;
/// assert_eq!(estimate_max_hr(40).unwrap(), 179);
/// ```
pub fn estimate_max_hr(age: u32) -> AppResult<u32> {
    if age == 0 || age > 120 {
        return Err(AppError::invalid_input(format!(
            "Age must be between 1 and 120 years, got {age}"
        )));
    }

    Ok(estimate(age))
}

/// Max heart rate for the assumed default age of 30
///
/// Birth dates are not collected, so the default settings use a fixed age.
#[must_use]
pub fn default_max_hr() -> u32 {
    estimate(DEFAULT_ASSUMED_AGE)
}

fn estimate(age: u32) -> u32 {
    ESTIMATE_SLOPE
        .mul_add(-f64::from(age), ESTIMATE_INTERCEPT)
        .round() as u32
}
