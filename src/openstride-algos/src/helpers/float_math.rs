use crate::WorkoutError;

/// Floored division: the quotient rounded towards negative infinity.
///
/// Derived from the `fmod` remainder rather than `(lhs / rhs).floor()`, so a
/// quotient that rounds up to a whole number in floating point is still
/// floored from the exact value.
pub fn floor_div(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    let mut div = (lhs - rem) / rhs;
    if rem != 0.0 && (rhs < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(lhs / rhs);
    }

    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}

pub fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidInput { field, value })
    }
}

/// Accepts counts that arrive as floats, as long as they are whole and fit a `u32`.
pub fn whole(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidInput { field, value })
    }
}
