use clap::Parser;
use energy_analytics::models::{Granularity, TierFilter};
use energy_analytics::state::TipCursor;
use energy_analytics::{Config, DashboardSelection, DashboardService};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Evaluate the energy dashboard for one selection and print it as JSON
#[derive(Parser, Debug)]
#[command(name = "energy-dashboard")]
#[command(version, about, long_about = None)]
struct Args {
    /// Consumption series to show: hourly, daily or weekly
    #[arg(long)]
    granularity: Option<Granularity>,

    /// Appliance breakdown filter: all, high, medium or low
    #[arg(long)]
    tier: Option<TierFilter>,

    /// Zero-based index into the tip catalog
    #[arg(long)]
    tip: Option<usize>,

    /// Open the consumption detail view
    #[arg(long)]
    detail: bool,
}

impl Args {
    /// Apply the flags on top of the default selection.
    fn apply(
        &self,
        mut selection: DashboardSelection,
    ) -> energy_analytics::Result<DashboardSelection> {
        if let Some(granularity) = self.granularity {
            selection = selection.select_granularity(granularity);
        }
        if let Some(tier) = self.tier {
            selection = selection.select_tier_filter(tier);
        }
        if let Some(index) = self.tip {
            selection.tip = TipCursor::at(index, selection.tip.count())?;
        }
        if self.detail {
            selection = selection.open_detail();
        }
        Ok(selection)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if std::env::var("LOG_FORMAT").as_deref() == Ok("json") {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    init_logging();
    info!("Starting energy-dashboard");

    let cfg_path = std::env::var("APP_CONFIG").unwrap_or_else(|_| "config/dashboard.yaml".into());
    let cfg = Config::load(&cfg_path)?;
    info!(path = %cfg_path, "Configuration loaded");

    let service = DashboardService::new(cfg)?;
    let selection = args.apply(service.initial_selection()?)?;
    info!(
        granularity = %selection.granularity,
        tier = selection.tier_filter.as_str(),
        tip = selection.tip.index(),
        detail = selection.detail_view,
        "Selection resolved"
    );

    let today = chrono::Local::now().date_naive();
    let summary = service.summary(&selection, today)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> DashboardSelection {
        DashboardSelection::new(5).unwrap()
    }

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from([
            "energy-dashboard",
            "--granularity",
            "weekly",
            "--tier",
            "low",
            "--tip",
            "3",
            "--detail",
        ])
        .unwrap();

        assert_eq!(args.granularity, Some(Granularity::Weekly));
        assert_eq!(args.tier, Some(TierFilter::Low));

        let selection = args.apply(defaults()).unwrap();
        assert_eq!(selection.granularity, Granularity::Weekly);
        assert_eq!(selection.tier_filter, TierFilter::Low);
        assert_eq!(selection.tip.index(), 3);
        assert!(selection.detail_view);
    }

    #[test]
    fn test_no_flags_keeps_defaults() {
        let args = Args::try_parse_from(["energy-dashboard"]).unwrap();
        assert_eq!(args.apply(defaults()).unwrap(), defaults());
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!(Args::try_parse_from(["energy-dashboard", "--granularity", "yearly"]).is_err());
        assert!(Args::try_parse_from(["energy-dashboard", "--tier", "everything"]).is_err());
        assert!(Args::try_parse_from(["energy-dashboard", "--verbose"]).is_err());
    }

    #[test]
    fn test_tip_wraps_into_catalog() {
        let args = Args::try_parse_from(["energy-dashboard", "--tip", "7"]).unwrap();
        assert_eq!(args.apply(defaults()).unwrap().tip.index(), 2);
        assert!(Args::try_parse_from(["energy-dashboard", "--tip", "-1"]).is_err());
    }
}
