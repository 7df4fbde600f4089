use crate::analytics::{
    appliance_breakdown, change_badge, classify_budget_status, classify_efficiency,
    classify_load_level, collect_insights, peak_bucket, percent_change, utilization_percent,
    BudgetStatus, ChangeBadge, Direction, EfficiencyBadge, Insight, LoadLevel, Trend,
};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{EfficiencyTier, EnergyTip, Granularity, TierFilter, TimeSeriesBucket};
use crate::state::DashboardSelection;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Budget share above which the over-limit banner is shown. Strictly greater:
/// at exactly this value the status is already Warning but the banner stays hidden.
pub const BUDGET_LIMIT_BANNER_ABOVE: u8 = 85;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub title: String,
    pub date: String,
    pub unread_notifications: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionOverview {
    pub current_power: f64,
    pub daily_consumption: f64,
    pub estimated_cost: f64,
    pub formatted_cost: String,
    pub max_power: f64,
    pub power_percent: u8,
    pub load_level: LoadLevel,
    pub usage_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub budget_amount: f64,
    pub current_usage: f64,
    pub remaining_amount: f64,
    pub percent_used: u8,
    pub status: BudgetStatus,
    pub days_remaining: u32,
    pub billing_cycle_total: u32,
    pub show_limit_warning: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplianceCard {
    pub name: String,
    pub power: f64,
    pub daily_usage: f64,
    pub efficiency: EfficiencyTier,
    pub badge: EfficiencyBadge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplianceRow {
    pub name: String,
    pub power: f64,
    pub efficiency: EfficiencyTier,
    pub badge: EfficiencyBadge,
    pub change: ChangeBadge,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumptionDetail {
    pub daily_consumption: f64,
    pub previous_period_consumption: f64,
    pub trend: Trend,
    pub trend_display: String,
    pub usage_verdict: &'static str,
    pub granularity: Granularity,
    pub unit: &'static str,
    pub series: Vec<TimeSeriesBucket>,
    pub peak: Option<TimeSeriesBucket>,
    pub tier_filter: TierFilter,
    pub appliances: Vec<ApplianceRow>,
    pub insights: Vec<Insight>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipView {
    pub position: usize,
    pub count: usize,
    pub tip: EnergyTip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub header: HeaderView,
    pub overview: ConsumptionOverview,
    pub budget: BudgetSummary,
    pub appliances: Vec<ApplianceCard>,
    pub tip: TipView,
    /// Present only while the detail view is open.
    pub detail: Option<ConsumptionDetail>,
}

/// Header date, e.g. "Monday, October 19, 2026".
pub fn header_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn format_cost(cost: f64) -> String {
    format!("{:.2}", cost)
}

fn usage_verdict(direction: Direction) -> &'static str {
    match direction {
        Direction::Increase => "Above Average Usage",
        Direction::Decrease | Direction::Flat => "Efficient Usage",
    }
}

/// Derives every widget's values from a validated `Config`.
///
/// Nothing is cached: each call recomputes from the configuration and the
/// selection it is given.
#[derive(Debug, Clone)]
pub struct DashboardService {
    config: Config,
}

impl DashboardService {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Default selection sized to this dashboard's tip catalog.
    pub fn initial_selection(&self) -> Result<DashboardSelection> {
        DashboardSelection::new(self.config.tips.len())
    }

    pub fn header(&self, today: NaiveDate) -> HeaderView {
        HeaderView {
            title: self.config.header.title.clone(),
            date: header_date(today),
            unread_notifications: self.config.header.unread_notifications,
        }
    }

    pub fn overview(&self) -> Result<ConsumptionOverview> {
        let reading = &self.config.reading;
        let power_percent = utilization_percent(reading.current_power, reading.max_power)?;
        let load_level = classify_load_level(f64::from(power_percent));
        debug!(power_percent, ?load_level, "computed consumption overview");

        Ok(ConsumptionOverview {
            current_power: reading.current_power,
            daily_consumption: reading.daily_consumption,
            estimated_cost: reading.estimated_cost,
            formatted_cost: format_cost(reading.estimated_cost),
            max_power: reading.max_power,
            power_percent,
            load_level,
            usage_label: load_level.usage_label(),
        })
    }

    pub fn budget(&self) -> Result<BudgetSummary> {
        let budget = &self.config.budget;
        budget.validate()?;
        let percent_used = utilization_percent(budget.current_usage, budget.budget_amount)?;
        let status = classify_budget_status(f64::from(percent_used));
        debug!(percent_used, ?status, "computed budget summary");

        Ok(BudgetSummary {
            budget_amount: budget.budget_amount,
            current_usage: budget.current_usage,
            remaining_amount: budget.remaining_amount(),
            percent_used,
            status,
            days_remaining: budget.days_remaining,
            billing_cycle_total: budget.billing_cycle_total,
            show_limit_warning: percent_used > BUDGET_LIMIT_BANNER_ABOVE,
        })
    }

    /// Appliance cards in configuration order.
    pub fn appliance_cards(&self) -> Vec<ApplianceCard> {
        self.config
            .appliances
            .iter()
            .map(|a| ApplianceCard {
                name: a.name.clone(),
                power: a.power,
                daily_usage: a.daily_usage,
                efficiency: a.efficiency_tier,
                badge: classify_efficiency(a.efficiency_tier),
            })
            .collect()
    }

    pub fn trend(&self) -> Result<Trend> {
        let reading = &self.config.reading;
        percent_change(reading.daily_consumption, reading.previous_period_consumption)
    }

    pub fn insights(&self) -> Result<Vec<Insight>> {
        let trend = self.trend()?;
        Ok(collect_insights(
            &trend,
            &self.config.appliances,
            self.config.series.get(Granularity::Hourly),
        ))
    }

    pub fn detail(&self, selection: &DashboardSelection) -> Result<ConsumptionDetail> {
        let reading = &self.config.reading;
        let trend = self.trend()?;
        let series = self.config.series.get(selection.granularity);
        let insights = collect_insights(
            &trend,
            &self.config.appliances,
            self.config.series.get(Granularity::Hourly),
        );

        let appliances = appliance_breakdown(&self.config.appliances, selection.tier_filter)
            .into_iter()
            .map(|a| ApplianceRow {
                badge: classify_efficiency(a.efficiency_tier),
                change: change_badge(a.change_percent),
                efficiency: a.efficiency_tier,
                power: a.power,
                name: a.name,
            })
            .collect::<Vec<_>>();

        debug!(
            granularity = %selection.granularity,
            tier_filter = selection.tier_filter.as_str(),
            delta = trend.delta,
            rows = appliances.len(),
            "computed consumption detail"
        );

        Ok(ConsumptionDetail {
            daily_consumption: reading.daily_consumption,
            previous_period_consumption: reading.previous_period_consumption,
            trend_display: trend.magnitude_display(),
            usage_verdict: usage_verdict(trend.direction),
            trend,
            granularity: selection.granularity,
            unit: selection.granularity.unit(),
            series: series.to_vec(),
            peak: peak_bucket(series).cloned(),
            tier_filter: selection.tier_filter,
            appliances,
            insights,
        })
    }

    pub fn current_tip(&self, selection: &DashboardSelection) -> Result<TipView> {
        let tip = selection.tip.current(&self.config.tips).ok_or_else(|| {
            AppError::invalid(format!(
                "tip cursor built for {} tips, catalog has {}",
                selection.tip.count(),
                self.config.tips.len()
            ))
        })?;

        Ok(TipView {
            position: selection.tip.index(),
            count: selection.tip.count(),
            tip: tip.clone(),
        })
    }

    pub fn summary(
        &self,
        selection: &DashboardSelection,
        today: NaiveDate,
    ) -> Result<DashboardSummary> {
        let detail = if selection.detail_view {
            Some(self.detail(selection)?)
        } else {
            None
        };

        Ok(DashboardSummary {
            header: self.header(today),
            overview: self.overview()?,
            budget: self.budget()?,
            appliances: self.appliance_cards(),
            tip: self.current_tip(selection)?,
            detail,
        })
    }
}
