pub mod dashboard;

pub use dashboard::{
    format_cost, header_date, ApplianceCard, ApplianceRow, BudgetSummary, ConsumptionDetail,
    ConsumptionOverview, DashboardService, DashboardSummary, HeaderView, TipView,
};
