//! CLI command implementations

pub mod apply;
pub mod attention;
pub mod check;
pub mod graph;
pub mod labor;
pub mod next;
pub mod statuses;

use chrono::NaiveDate;

use crate::errors::{PlotcycleError, Result};
use crate::schemas::{LaborKind, PlotStatus};

/// Parse a status argument, reporting unknown codes as `UnknownStatus`
pub(crate) fn parse_status(value: &str) -> Result<PlotStatus> {
    value
        .parse()
        .map_err(|_: String| PlotcycleError::UnknownStatus(value.trim().to_string()))
}

/// Parse a labor argument, reporting unknown codes as `UnknownLabor`
pub(crate) fn parse_labor(value: &str) -> Result<LaborKind> {
    value
        .parse()
        .map_err(|_: String| PlotcycleError::UnknownLabor(value.trim().to_string()))
}

/// The given date, or today's local date
pub(crate) fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}
