use super::{ensure_non_negative, ensure_positive};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Instantaneous and periodic consumption figures for the home meter.
///
/// Power values are in kW, consumption in kWh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub current_power: f64,
    pub daily_consumption: f64,
    pub previous_period_consumption: f64,
    /// Gauge ceiling in kW
    pub max_power: f64,
    /// Monthly cost projection, carried through for display
    #[serde(default)]
    pub estimated_cost: f64,
}

impl Reading {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("max_power", self.max_power)?;
        ensure_non_negative("current_power", self.current_power)?;
        ensure_non_negative("daily_consumption", self.daily_consumption)?;
        ensure_non_negative(
            "previous_period_consumption",
            self.previous_period_consumption,
        )?;
        ensure_non_negative("estimated_cost", self.estimated_cost)?;
        Ok(())
    }
}
