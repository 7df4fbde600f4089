use crate::models::EfficiencyTier;
use serde::Serialize;

/// Gauge fill at which load stops being Low.
pub const LOAD_MODERATE_THRESHOLD: f64 = 40.0;
/// Gauge fill at which load becomes High.
pub const LOAD_HIGH_THRESHOLD: f64 = 70.0;
/// Budget utilization at which the status leaves OnTrack.
pub const BUDGET_CAUTION_THRESHOLD: f64 = 60.0;
/// Budget utilization at which the status becomes Warning.
pub const BUDGET_WARNING_THRESHOLD: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadLevel {
    Low,
    Moderate,
    High,
}

impl LoadLevel {
    pub fn usage_label(&self) -> &'static str {
        match self {
            LoadLevel::Low => "Efficient usage",
            LoadLevel::Moderate => "Moderate usage",
            LoadLevel::High => "High consumption",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    Caution,
    Warning,
}

/// Rendering hint; collaborators map it onto an actual palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKey {
    Good,
    Fair,
    Poor,
    Neutral,
}

impl ColorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKey::Good => "good",
            ColorKey::Fair => "fair",
            ColorKey::Poor => "poor",
            ColorKey::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EfficiencyBadge {
    pub label: &'static str,
    pub color_key: ColorKey,
}

/// Position of a percentage relative to a lower and upper breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Below,
    Between,
    AtOrAbove,
}

fn band(percentage: f64, lower: f64, upper: f64) -> Band {
    if percentage < lower {
        Band::Below
    } else if percentage < upper {
        Band::Between
    } else {
        Band::AtOrAbove
    }
}

pub fn classify_efficiency(tier: EfficiencyTier) -> EfficiencyBadge {
    match tier {
        EfficiencyTier::High => EfficiencyBadge {
            label: "High",
            color_key: ColorKey::Good,
        },
        EfficiencyTier::Medium => EfficiencyBadge {
            label: "Medium",
            color_key: ColorKey::Fair,
        },
        EfficiencyTier::Low => EfficiencyBadge {
            label: "Low",
            color_key: ColorKey::Poor,
        },
    }
}

/// Classify an untyped tier label. Anything that is not a known tier gets the
/// neutral badge instead of an error.
pub fn classify_efficiency_label(label: &str) -> EfficiencyBadge {
    match EfficiencyTier::from_label(label) {
        Some(tier) => classify_efficiency(tier),
        None => EfficiencyBadge {
            label: "Unknown",
            color_key: ColorKey::Neutral,
        },
    }
}

pub fn classify_load_level(percentage: f64) -> LoadLevel {
    match band(percentage, LOAD_MODERATE_THRESHOLD, LOAD_HIGH_THRESHOLD) {
        Band::Below => LoadLevel::Low,
        Band::Between => LoadLevel::Moderate,
        Band::AtOrAbove => LoadLevel::High,
    }
}

pub fn classify_budget_status(percentage: f64) -> BudgetStatus {
    match band(percentage, BUDGET_CAUTION_THRESHOLD, BUDGET_WARNING_THRESHOLD) {
        Band::Below => BudgetStatus::OnTrack,
        Band::Between => BudgetStatus::Caution,
        Band::AtOrAbove => BudgetStatus::Warning,
    }
}
