//! Pure derivations from raw readings to the values the dashboard widgets display.
//!
//! Every function here is stateless and side-effect free: identical inputs always
//! produce identical outputs, and nothing is cached between calls.

pub mod aggregator;
pub mod classifier;
pub mod insights;
pub mod ranking;
pub mod series;
pub mod trend;

pub use aggregator::utilization_percent;
pub use classifier::{
    classify_budget_status, classify_efficiency, classify_efficiency_label, classify_load_level,
    BudgetStatus, ColorKey, EfficiencyBadge, LoadLevel,
};
pub use insights::{collect_insights, Insight};
pub use ranking::{appliance_breakdown, filter_by_tier, rank_appliances};
pub use series::{peak_bucket, select_series};
pub use trend::{change_badge, percent_change, ChangeBadge, Direction, Trend};
