use crate::analytics::series::peak_bucket;
use crate::analytics::trend::{Direction, Trend};
use crate::models::{ApplianceUsage, EfficiencyTier, TimeSeriesBucket};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    /// Today's consumption is above the previous period.
    UnusualConsumption { magnitude: String },
    /// Low-tier appliances, in input order.
    InefficientAppliances { names: Vec<String> },
    /// Busiest bucket of the hourly series.
    PeakPeriod { label: String, value: f64 },
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::UnusualConsumption { magnitude } => write!(
                f,
                "Your energy usage is {} higher than yesterday. Check your appliances for any issues.",
                magnitude
            ),
            Insight::InefficientAppliances { names } => {
                let verb = if names.len() == 1 { "is" } else { "are" };
                write!(
                    f,
                    "{} {} consuming more energy than expected.",
                    names.join(", "),
                    verb
                )
            }
            Insight::PeakPeriod { label, .. } => write!(
                f,
                "Your highest energy consumption today was around {}. Consider shifting some activities to off-peak hours.",
                label
            ),
        }
    }
}

pub fn collect_insights(
    trend: &Trend,
    appliances: &[ApplianceUsage],
    hourly: &[TimeSeriesBucket],
) -> Vec<Insight> {
    let mut insights = Vec::new();

    if trend.direction == Direction::Increase {
        insights.push(Insight::UnusualConsumption {
            magnitude: trend.magnitude_display(),
        });
    }

    let inefficient: Vec<String> = appliances
        .iter()
        .filter(|a| a.efficiency_tier == EfficiencyTier::Low)
        .map(|a| a.name.clone())
        .collect();
    if !inefficient.is_empty() {
        insights.push(Insight::InefficientAppliances { names: inefficient });
    }

    if let Some(peak) = peak_bucket(hourly) {
        insights.push(Insight::PeakPeriod {
            label: peak.label.clone(),
            value: peak.value,
        });
    }

    insights
}
