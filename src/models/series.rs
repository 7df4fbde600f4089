use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time-bucketing resolution of a consumption series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Hourly,
    Daily,
    Weekly,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [
        Granularity::Hourly,
        Granularity::Daily,
        Granularity::Weekly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Hourly => "hourly",
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
        }
    }

    /// Hourly buckets hold average power, the coarser ones hold energy.
    pub fn unit(&self) -> &'static str {
        match self {
            Granularity::Hourly => "kW",
            Granularity::Daily | Granularity::Weekly => "kWh",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hourly" => Ok(Granularity::Hourly),
            "daily" => Ok(Granularity::Daily),
            "weekly" => Ok(Granularity::Weekly),
            other => Err(AppError::UnknownGranularity(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesBucket {
    #[serde(alias = "time")]
    pub label: String,
    pub value: f64,
}

impl TimeSeriesBucket {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Independently supplied series, one per granularity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionSeries {
    #[serde(default)]
    pub hourly: Vec<TimeSeriesBucket>,
    #[serde(default)]
    pub daily: Vec<TimeSeriesBucket>,
    #[serde(default)]
    pub weekly: Vec<TimeSeriesBucket>,
}

impl ConsumptionSeries {
    pub fn get(&self, granularity: Granularity) -> &[TimeSeriesBucket] {
        match granularity {
            Granularity::Hourly => &self.hourly,
            Granularity::Daily => &self.daily,
            Granularity::Weekly => &self.weekly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_round_trips_through_str() {
        for g in Granularity::ALL {
            assert_eq!(g.as_str().parse::<Granularity>().unwrap(), g);
        }
    }

    #[test]
    fn test_unknown_granularity() {
        let err = "monthly".parse::<Granularity>().unwrap_err();
        assert!(matches!(err, AppError::UnknownGranularity(ref k) if k == "monthly"));
    }

    #[test]
    fn test_granularity_is_case_sensitive() {
        assert!("Hourly".parse::<Granularity>().is_err());
    }

    #[test]
    fn test_units() {
        assert_eq!(Granularity::Hourly.unit(), "kW");
        assert_eq!(Granularity::Daily.unit(), "kWh");
        assert_eq!(Granularity::Weekly.unit(), "kWh");
    }

    #[test]
    fn test_bucket_accepts_time_alias() {
        let b: TimeSeriesBucket = serde_json::from_str(r#"{"time": "6AM", "value": 1.2}"#).unwrap();
        assert_eq!(b, TimeSeriesBucket::new("6AM", 1.2));
    }

    #[test]
    fn test_missing_series_default_to_empty() {
        let series: ConsumptionSeries =
            serde_yaml::from_str("daily:\n  - { label: Mon, value: 16.5 }\n").unwrap();
        assert!(series.get(Granularity::Hourly).is_empty());
        assert_eq!(series.get(Granularity::Daily).len(), 1);
        assert!(series.get(Granularity::Weekly).is_empty());
    }
}
