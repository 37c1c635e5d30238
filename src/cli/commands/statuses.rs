//! Statuses command - List the status catalog

use serde::Serialize;

use crate::domain::{valid_destinations, PLOT_STATUSES};
use crate::errors::{PlotcycleError, Result};
use crate::schemas::PlotStatus;

/// One catalog entry as printed by `statuses --json`
#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub code: PlotStatus,
    pub name: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
    pub sowable: bool,
    pub harvestable: bool,
    pub active_crop: bool,
    pub resting: bool,
    pub needs_attention: bool,
    pub next: Vec<PlotStatus>,
}

impl From<PlotStatus> for StatusSummary {
    fn from(status: PlotStatus) -> Self {
        StatusSummary {
            code: status,
            name: status.name(),
            label: status.label(),
            detail: status.detail(),
            sowable: status.is_sowable(),
            harvestable: status.is_harvestable(),
            active_crop: status.is_active_crop(),
            resting: status.is_resting(),
            needs_attention: status.needs_attention(),
            next: valid_destinations(status),
        }
    }
}

/// List every status with its label and classifications
pub fn run(json: bool) -> Result<()> {
    let summaries: Vec<StatusSummary> = PLOT_STATUSES.iter().map(|&s| s.into()).collect();

    if json {
        let out = serde_json::to_string_pretty(&summaries)
            .map_err(|e| PlotcycleError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    for summary in &summaries {
        let mut flags = Vec::new();
        if summary.sowable {
            flags.push("sowable");
        }
        if summary.harvestable {
            flags.push("harvestable");
        }
        if summary.active_crop {
            flags.push("active-crop");
        }
        if summary.resting {
            flags.push("resting");
        }
        if summary.needs_attention {
            flags.push("needs-attention");
        }
        println!(
            "{:<20} {:<26} {}",
            summary.code,
            summary.label,
            flags.join(", ")
        );
    }
    Ok(())
}
