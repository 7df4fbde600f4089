use crate::error::{AppError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increase,
    Decrease,
    Flat,
}

impl Direction {
    /// Direction of a signed change. Zero and NaN are Flat.
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Direction::Increase
        } else if value < 0.0 {
            Direction::Decrease
        } else {
            Direction::Flat
        }
    }
}

/// Signed percentage change between two periods
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub delta: f64,
    pub direction: Direction,
}

impl Trend {
    /// Absolute delta with one decimal, e.g. "15.4%".
    pub fn magnitude_display(&self) -> String {
        format!("{:.1}%", self.delta.abs())
    }
}

/// `(current - previous) / previous * 100`.
///
/// A zero previous value has no meaningful percentage change and is reported as
/// `DivisionUndefined` rather than being mapped to 0% or 100%.
pub fn percent_change(current: f64, previous: f64) -> Result<Trend> {
    if previous == 0.0 {
        return Err(AppError::DivisionUndefined);
    }
    if !current.is_finite() || !previous.is_finite() {
        return Err(AppError::invalid(format!(
            "trend inputs must be finite, got {} and {}",
            current, previous
        )));
    }

    let delta = (current - previous) / previous * 100.0;
    Ok(Trend {
        delta,
        direction: Direction::of(delta),
    })
}

/// Per-appliance change indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeBadge {
    pub direction: Direction,
    pub text: String,
}

pub fn change_badge(change_percent: f64) -> ChangeBadge {
    let direction = Direction::of(change_percent);
    let text = match direction {
        Direction::Increase => format!("+{}%", change_percent),
        Direction::Decrease => format!("{}%", change_percent),
        Direction::Flat => "0%".to_string(),
    };
    ChangeBadge { direction, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_increase() {
        let trend = percent_change(18.7, 16.2).unwrap();
        assert!((trend.delta - 15.432).abs() < 0.001);
        assert_eq!(trend.direction, Direction::Increase);
        assert_eq!(trend.magnitude_display(), "15.4%");
    }

    #[test]
    fn test_decrease_shows_absolute_magnitude() {
        let trend = percent_change(15.0, 20.0).unwrap();
        assert_eq!(trend.delta, -25.0);
        assert_eq!(trend.direction, Direction::Decrease);
        assert_eq!(trend.magnitude_display(), "25.0%");
    }

    #[test]
    fn test_flat() {
        let trend = percent_change(16.2, 16.2).unwrap();
        assert_eq!(trend.delta, 0.0);
        assert_eq!(trend.direction, Direction::Flat);
    }

    #[test]
    fn test_zero_previous_is_undefined() {
        assert!(matches!(
            percent_change(18.7, 0.0),
            Err(AppError::DivisionUndefined)
        ));
        assert!(matches!(
            percent_change(0.0, 0.0),
            Err(AppError::DivisionUndefined)
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            percent_change(f64::INFINITY, 1.0),
            Err(AppError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_change_badges() {
        assert_eq!(
            change_badge(5.0),
            ChangeBadge {
                direction: Direction::Increase,
                text: "+5%".to_string()
            }
        );
        assert_eq!(change_badge(-3.0).text, "-3%");
        assert_eq!(change_badge(-3.0).direction, Direction::Decrease);
        assert_eq!(change_badge(0.0).text, "0%");
        assert_eq!(change_badge(0.0).direction, Direction::Flat);
        assert_eq!(change_badge(2.5).text, "+2.5%");
    }
}
