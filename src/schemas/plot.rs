//! Plot status record - the persisted status of one plot

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::PlotStatus;

/// Current status of a plot together with its change audit fields.
///
/// The record belongs to the persistence layer; this crate only validates
/// and produces updated copies of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotStatusRecord {
    /// Plot identifier in the persistence layer
    pub plot_id: String,

    /// Human-readable plot name
    pub name: String,

    /// Current lifecycle status
    #[serde(default)]
    pub status: PlotStatus,

    /// When the status last changed (null until the first change)
    #[serde(default)]
    pub last_changed_at: Option<DateTime<Utc>>,

    /// Free-text reason recorded with the last change
    #[serde(default)]
    pub change_reason: Option<String>,

    /// Sowing date of the current crop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sown_on: Option<NaiveDate>,

    /// Actual harvest date of the last crop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvested_on: Option<NaiveDate>,
}

impl PlotStatusRecord {
    /// Create a record for a newly created plot, which starts as Available
    pub fn new(plot_id: impl Into<String>, name: impl Into<String>) -> Self {
        PlotStatusRecord {
            plot_id: plot_id.into(),
            name: name.into(),
            status: PlotStatus::Available,
            last_changed_at: None,
            change_reason: None,
            sown_on: None,
            harvested_on: None,
        }
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new record with the given status and reason, stamped now.
    ///
    /// Does not check the transition rules; use
    /// [`crate::domain::apply_status_change`] for a validated change.
    pub fn with_status(self, status: PlotStatus, reason: impl Into<String>) -> Self {
        self.with_status_at(status, reason, Utc::now())
    }

    /// Return a new record with the given status and reason, stamped at `at`
    pub fn with_status_at(
        mut self,
        status: PlotStatus,
        reason: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        self.status = status;
        self.change_reason = Some(reason.into());
        self.last_changed_at = Some(at);
        self
    }

    pub fn with_sown_on(mut self, date: Option<NaiveDate>) -> Self {
        self.sown_on = date;
        self
    }

    pub fn with_harvested_on(mut self, date: Option<NaiveDate>) -> Self {
        self.harvested_on = date;
        self
    }

    // ===== DERIVED VALUES =====

    /// Whole days since sowing, or None when no sowing date is recorded
    pub fn days_since_sowing(&self, today: NaiveDate) -> Option<i64> {
        self.sown_on.map(|sown| (today - sown).num_days())
    }

    /// Whole days since the actual harvest, or None when not harvested
    pub fn days_since_harvest(&self, today: NaiveDate) -> Option<i64> {
        self.harvested_on.map(|harvested| (today - harvested).num_days())
    }

    /// Whole days since the last status change; 0 if it never changed
    pub fn days_since_last_change(&self, today: NaiveDate) -> i64 {
        self.last_changed_at
            .map(|at| (today - at.date_naive()).num_days())
            .unwrap_or(0)
    }
}
