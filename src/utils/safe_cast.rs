//! Safe casting utilities for cursor coordinate conversion

use crate::{Error, Result};

/// Safely convert f32 to i32 with bounds checking
///
/// # Errors
///
/// Returns an error if the value is not finite or outside i32 range
#[allow(clippy::cast_precision_loss)] // MIN/MAX bounds checking is approximate
#[allow(clippy::cast_possible_truncation)] // Truncation after bounds check is safe
pub fn f32_to_i32(value: f32) -> Result<i32> {
    if value.is_finite() && value >= i32::MIN as f32 && value <= i32::MAX as f32 {
        Ok(value as i32)
    } else {
        Err(Error::InvalidInput(format!(
            "Value {value} cannot be safely converted to i32"
        )))
    }
}

/// Round a float cursor coordinate to the nearest pixel
///
/// # Errors
///
/// Returns an error if the value is not finite or outside i32 range
pub fn round_to_pixel(value: f32) -> Result<i32> {
    f32_to_i32(value.round())
}
