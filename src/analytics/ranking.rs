use crate::models::{ApplianceUsage, TierFilter};

/// Appliances ordered by power, highest first.
///
/// The sort is stable: appliances drawing the same power keep their input order,
/// so equal rows never swap places between renders.
pub fn rank_appliances(items: &[ApplianceUsage]) -> Vec<ApplianceUsage> {
    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| b.power.total_cmp(&a.power));
    ranked
}

/// Keep only the appliances accepted by `filter`, preserving input order.
pub fn filter_by_tier(items: &[ApplianceUsage], filter: TierFilter) -> Vec<ApplianceUsage> {
    items
        .iter()
        .filter(|item| filter.accepts(item.efficiency_tier))
        .cloned()
        .collect()
}

/// Rank, then filter. Filtered subsets therefore stay power-sorted.
pub fn appliance_breakdown(items: &[ApplianceUsage], filter: TierFilter) -> Vec<ApplianceUsage> {
    filter_by_tier(&rank_appliances(items), filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EfficiencyTier;

    fn dashboard_appliances() -> Vec<ApplianceUsage> {
        vec![
            ApplianceUsage::new("Air Conditioner", 1.2, EfficiencyTier::Medium),
            ApplianceUsage::new("Refrigerator", 0.8, EfficiencyTier::High),
            ApplianceUsage::new("Television", 0.3, EfficiencyTier::High),
            ApplianceUsage::new("Water Heater", 2.5, EfficiencyTier::Low),
            ApplianceUsage::new("Washing Machine", 0.1, EfficiencyTier::Medium),
        ]
    }

    fn powers(items: &[ApplianceUsage]) -> Vec<f64> {
        items.iter().map(|a| a.power).collect()
    }

    fn names(items: &[ApplianceUsage]) -> Vec<&str> {
        items.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_rank_by_power_descending() {
        let ranked = rank_appliances(&dashboard_appliances());
        assert_eq!(powers(&ranked), vec![2.5, 1.2, 0.8, 0.3, 0.1]);
    }

    #[test]
    fn test_rank_is_stable_for_equal_power() {
        let items = vec![
            ApplianceUsage::new("Dryer", 0.2, EfficiencyTier::Low),
            ApplianceUsage::new("Refrigerator", 0.8, EfficiencyTier::High),
            ApplianceUsage::new("Dishwasher", 0.8, EfficiencyTier::Medium),
            ApplianceUsage::new("Kettle", 0.8, EfficiencyTier::Low),
        ];
        let ranked = rank_appliances(&items);
        assert_eq!(
            names(&ranked),
            vec!["Refrigerator", "Dishwasher", "Kettle", "Dryer"]
        );
    }

    #[test]
    fn test_rank_does_not_touch_input() {
        let items = dashboard_appliances();
        let _ = rank_appliances(&items);
        assert_eq!(powers(&items), vec![1.2, 0.8, 0.3, 2.5, 0.1]);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let items = dashboard_appliances();
        assert_eq!(filter_by_tier(&items, TierFilter::All), items);
    }

    #[test]
    fn test_filter_keeps_only_requested_tier() {
        let high = filter_by_tier(&dashboard_appliances(), TierFilter::High);
        assert_eq!(names(&high), vec!["Refrigerator", "Television"]);
    }

    #[test]
    fn test_breakdown_stays_power_sorted() {
        let medium = appliance_breakdown(&dashboard_appliances(), TierFilter::Medium);
        assert_eq!(names(&medium), vec!["Air Conditioner", "Washing Machine"]);

        let low = appliance_breakdown(&dashboard_appliances(), TierFilter::Low);
        assert!(low
            .iter()
            .all(|a| a.efficiency_tier == EfficiencyTier::Low));
        assert_eq!(powers(&low), vec![2.5]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_appliances(&[]).is_empty());
        assert!(appliance_breakdown(&[], TierFilter::Low).is_empty());
    }
}
