use super::{ensure_non_negative, ensure_positive};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Monthly spending budget and billing-cycle position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetState {
    pub budget_amount: f64,
    pub current_usage: f64,
    pub days_remaining: u32,
    pub billing_cycle_total: u32,
}

impl BudgetState {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("budget_amount", self.budget_amount)?;
        ensure_non_negative("current_usage", self.current_usage)?;
        if self.billing_cycle_total == 0 {
            return Err(AppError::invalid("billing_cycle_total must be greater than zero"));
        }
        if self.days_remaining > self.billing_cycle_total {
            return Err(AppError::invalid(format!(
                "days_remaining ({}) exceeds billing_cycle_total ({})",
                self.days_remaining, self.billing_cycle_total
            )));
        }
        Ok(())
    }

    /// Budget left in the cycle, never negative
    pub fn remaining_amount(&self) -> f64 {
        (self.budget_amount - self.current_usage).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget() -> BudgetState {
        BudgetState {
            budget_amount: 2500.0,
            current_usage: 1875.0,
            days_remaining: 12,
            billing_cycle_total: 30,
        }
    }

    #[test]
    fn test_valid_budget() {
        assert!(budget().validate().is_ok());
        assert_eq!(budget().remaining_amount(), 625.0);
    }

    #[test]
    fn test_overspent_budget_has_no_remaining_amount() {
        let b = BudgetState {
            current_usage: 3000.0,
            ..budget()
        };
        assert!(b.validate().is_ok());
        assert_eq!(b.remaining_amount(), 0.0);
    }

    #[test]
    fn test_days_remaining_cannot_exceed_cycle() {
        let b = BudgetState {
            days_remaining: 31,
            ..budget()
        };
        assert!(matches!(b.validate(), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_cycle_rejected() {
        let b = BudgetState {
            days_remaining: 0,
            billing_cycle_total: 0,
            ..budget()
        };
        assert!(matches!(b.validate(), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_budget_rejected() {
        let b = BudgetState {
            budget_amount: 0.0,
            ..budget()
        };
        assert!(matches!(b.validate(), Err(AppError::InvalidArgument(_))));
    }
}
