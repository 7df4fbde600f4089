use super::ensure_non_negative;
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Energy-use quality of an appliance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EfficiencyTier {
    High,
    Medium,
    Low,
}

impl EfficiencyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            EfficiencyTier::High => "high",
            EfficiencyTier::Medium => "medium",
            EfficiencyTier::Low => "low",
        }
    }

    /// Parse a lowercase tier label. Unknown labels yield `None`.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "high" => Some(EfficiencyTier::High),
            "medium" => Some(EfficiencyTier::Medium),
            "low" => Some(EfficiencyTier::Low),
            _ => None,
        }
    }
}

/// Appliance breakdown filter: everything, or one efficiency tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl TierFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierFilter::All => "all",
            TierFilter::High => "high",
            TierFilter::Medium => "medium",
            TierFilter::Low => "low",
        }
    }

    /// The tier this filter keeps, or `None` for `All`.
    pub fn tier(&self) -> Option<EfficiencyTier> {
        match self {
            TierFilter::All => None,
            TierFilter::High => Some(EfficiencyTier::High),
            TierFilter::Medium => Some(EfficiencyTier::Medium),
            TierFilter::Low => Some(EfficiencyTier::Low),
        }
    }

    pub fn accepts(&self, tier: EfficiencyTier) -> bool {
        self.tier().map_or(true, |wanted| wanted == tier)
    }
}

impl From<EfficiencyTier> for TierFilter {
    fn from(tier: EfficiencyTier) -> Self {
        match tier {
            EfficiencyTier::High => TierFilter::High,
            EfficiencyTier::Medium => TierFilter::Medium,
            EfficiencyTier::Low => TierFilter::Low,
        }
    }
}

impl FromStr for TierFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(TierFilter::All),
            other => EfficiencyTier::from_label(other)
                .map(TierFilter::from)
                .ok_or_else(|| AppError::invalid(format!("unknown tier filter: {}", other))),
        }
    }
}

/// Power draw and efficiency of a single connected appliance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceUsage {
    pub name: String,
    /// Current draw in kW
    pub power: f64,
    /// Energy used today in kWh
    #[serde(default)]
    pub daily_usage: f64,
    #[serde(alias = "efficiency")]
    pub efficiency_tier: EfficiencyTier,
    /// Change against the previous period, in percent
    #[serde(default, alias = "change")]
    pub change_percent: f64,
}

impl ApplianceUsage {
    pub fn new(name: impl Into<String>, power: f64, efficiency_tier: EfficiencyTier) -> Self {
        Self {
            name: name.into(),
            power,
            daily_usage: 0.0,
            efficiency_tier,
            change_percent: 0.0,
        }
    }

    pub fn with_daily_usage(mut self, daily_usage: f64) -> Self {
        self.daily_usage = daily_usage;
        self
    }

    pub fn with_change(mut self, change_percent: f64) -> Self {
        self.change_percent = change_percent;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid("appliance name cannot be empty"));
        }
        ensure_non_negative("power", self.power)?;
        ensure_non_negative("daily_usage", self.daily_usage)?;
        if !self.change_percent.is_finite() {
            return Err(AppError::invalid(format!(
                "change_percent for {} must be finite",
                self.name
            )));
        }
        Ok(())
    }
}
