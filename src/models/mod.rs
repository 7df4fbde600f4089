pub mod appliance;
pub mod budget;
pub mod energy;
pub mod series;
pub mod tip;

pub use appliance::{ApplianceUsage, EfficiencyTier, TierFilter};
pub use budget::BudgetState;
pub use energy::Reading;
pub use series::{ConsumptionSeries, Granularity, TimeSeriesBucket};
pub use tip::{default_tips, EnergyTip};

use crate::error::{AppError, Result};

pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::invalid(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}

pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::invalid(format!(
            "{} must be greater than zero, got {}",
            field, value
        )));
    }
    Ok(())
}
