use crate::error::Result;
use crate::models::{ConsumptionSeries, Granularity, TimeSeriesBucket};

/// Look up the series for a caller-supplied granularity key.
///
/// No resampling happens between granularities; each series is returned exactly
/// as supplied. Unrecognized keys fail with `UnknownGranularity`.
pub fn select_series<'a>(
    series: &'a ConsumptionSeries,
    key: &str,
) -> Result<&'a [TimeSeriesBucket]> {
    let granularity: Granularity = key.parse()?;
    Ok(series.get(granularity))
}

/// Bucket with the highest value. The earliest bucket wins a tie.
pub fn peak_bucket(buckets: &[TimeSeriesBucket]) -> Option<&TimeSeriesBucket> {
    buckets.iter().fold(None, |best, bucket| match best {
        Some(current) if current.value >= bucket.value => Some(current),
        _ => Some(bucket),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn series() -> ConsumptionSeries {
        ConsumptionSeries {
            hourly: vec![
                TimeSeriesBucket::new("6AM", 1.2),
                TimeSeriesBucket::new("6PM", 2.7),
                TimeSeriesBucket::new("8PM", 3.1),
                TimeSeriesBucket::new("10PM", 2.2),
            ],
            daily: vec![
                TimeSeriesBucket::new("Mon", 16.5),
                TimeSeriesBucket::new("Sat", 21.4),
            ],
            weekly: vec![TimeSeriesBucket::new("Week 1", 112.5)],
        }
    }

    #[test]
    fn test_select_each_granularity() {
        let s = series();
        assert_eq!(select_series(&s, "hourly").unwrap().len(), 4);
        assert_eq!(select_series(&s, "daily").unwrap()[1].label, "Sat");
        assert_eq!(
            select_series(&s, "weekly").unwrap(),
            &[TimeSeriesBucket::new("Week 1", 112.5)]
        );
    }

    #[test]
    fn test_unknown_key_fails() {
        let s = series();
        assert!(matches!(
            select_series(&s, "monthly"),
            Err(AppError::UnknownGranularity(_))
        ));
        assert!(matches!(
            select_series(&s, ""),
            Err(AppError::UnknownGranularity(_))
        ));
    }

    #[test]
    fn test_peak_bucket() {
        let s = series();
        assert_eq!(peak_bucket(&s.hourly).unwrap().label, "8PM");
        assert_eq!(peak_bucket(&s.daily).unwrap().label, "Sat");
        assert!(peak_bucket(&[]).is_none());
    }

    #[test]
    fn test_peak_tie_keeps_first() {
        let buckets = vec![
            TimeSeriesBucket::new("Week 1", 120.0),
            TimeSeriesBucket::new("Week 2", 130.0),
            TimeSeriesBucket::new("Week 3", 130.0),
        ];
        assert_eq!(peak_bucket(&buckets).unwrap().label, "Week 2");
    }
}
