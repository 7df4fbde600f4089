pub mod selection;

pub use selection::{DashboardSelection, TipCursor};
