use crate::error::{AppError, Result};
use crate::models::{EnergyTip, Granularity, TierFilter};
use serde::Serialize;

/// Position in a circular tip catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TipCursor {
    index: usize,
    count: usize,
}

impl TipCursor {
    /// Cursor at the first tip. An empty catalog has nothing to cycle through.
    pub fn new(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(AppError::invalid("tip catalog cannot be empty"));
        }
        Ok(Self { index: 0, count })
    }

    /// Cursor at `index`, wrapped into the catalog.
    pub fn at(index: usize, count: usize) -> Result<Self> {
        let cursor = Self::new(count)?;
        Ok(Self {
            index: index % count,
            ..cursor
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn next(&self) -> Self {
        Self {
            index: (self.index + 1) % self.count,
            count: self.count,
        }
    }

    pub fn prev(&self) -> Self {
        Self {
            index: (self.index + self.count - 1) % self.count,
            count: self.count,
        }
    }

    /// Tip under the cursor. `None` when `tips` is not the catalog this cursor was built for.
    pub fn current<'a>(&self, tips: &'a [EnergyTip]) -> Option<&'a EnergyTip> {
        if tips.len() != self.count {
            return None;
        }
        tips.get(self.index)
    }
}

/// Caller-held view state: which series, which tier filter, which tip, and
/// whether the detail view is open. The fields are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardSelection {
    pub granularity: Granularity,
    pub tier_filter: TierFilter,
    pub tip: TipCursor,
    pub detail_view: bool,
}

impl DashboardSelection {
    pub fn new(tip_count: usize) -> Result<Self> {
        Ok(Self {
            granularity: Granularity::default(),
            tier_filter: TierFilter::default(),
            tip: TipCursor::new(tip_count)?,
            detail_view: false,
        })
    }

    pub fn select_granularity(self, granularity: Granularity) -> Self {
        Self {
            granularity,
            ..self
        }
    }

    pub fn select_tier_filter(self, tier_filter: TierFilter) -> Self {
        Self {
            tier_filter,
            ..self
        }
    }

    pub fn next_tip(self) -> Self {
        Self {
            tip: self.tip.next(),
            ..self
        }
    }

    pub fn prev_tip(self) -> Self {
        Self {
            tip: self.tip.prev(),
            ..self
        }
    }

    pub fn open_detail(self) -> Self {
        Self {
            detail_view: true,
            ..self
        }
    }

    pub fn close_detail(self) -> Self {
        Self {
            detail_view: false,
            ..self
        }
    }
}
