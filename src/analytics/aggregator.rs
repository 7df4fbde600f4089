use crate::error::{AppError, Result};

/// Largest value `utilization_percent` returns.
pub const MAX_PERCENT: u8 = 100;

/// Share of `capacity` consumed by `current`, as a whole percentage in 0..=100.
///
/// Computed as `round(current / capacity * 100)` with round-half-away-from-zero
/// (`f64::round`), so 84.5% becomes 85. Values above capacity clamp to 100.
pub fn utilization_percent(current: f64, capacity: f64) -> Result<u8> {
    if !capacity.is_finite() || capacity <= 0.0 {
        return Err(AppError::invalid(format!(
            "capacity must be greater than zero, got {}",
            capacity
        )));
    }
    if !current.is_finite() || current < 0.0 {
        return Err(AppError::invalid(format!(
            "current value must be non-negative, got {}",
            current
        )));
    }

    let percent = (current / capacity * 100.0).round();
    Ok(percent.min(f64::from(MAX_PERCENT)) as u8)
}
