pub mod analytics;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used items
pub use config::Config;
pub use error::{AppError, Result};
pub use services::{DashboardService, DashboardSummary};
pub use state::{DashboardSelection, TipCursor};
