//! Labor command - Record a labor and apply the automatic status change

use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{evaluate_labor, LaborOutcome};
use crate::errors::Result;
use crate::fs::{read_plot, write_plot};
use crate::schemas::{LaborHistory, LifecycleConfig};

use super::{parse_labor, resolve_today};

/// Evaluate `kind` against the plot stored at `plot`.
///
/// `completed` lists earlier labors; the new one is appended before the rules run.
/// A blocked suggestion is reported but is not an error.
pub fn run(
    plot: &Path,
    kind: &str,
    completed: &[String],
    today: Option<NaiveDate>,
    config: &LifecycleConfig,
    dry_run: bool,
) -> Result<()> {
    let record = read_plot(plot)?;
    let labor = parse_labor(kind)?;
    let earlier = completed
        .iter()
        .map(|k| parse_labor(k))
        .collect::<Result<Vec<_>>>()?;
    let history = LaborHistory::new(earlier).with_completed(labor);
    let today = resolve_today(today);

    match evaluate_labor(&record, labor, &history, today, config) {
        LaborOutcome::Unchanged => {
            println!(
                "{}: status unchanged ({})",
                record.plot_id,
                record.status.label()
            );
        }
        LaborOutcome::Applied(updated) => {
            println!(
                "{}: {} -> {}",
                updated.plot_id,
                record.status.label(),
                updated.status.label()
            );
            if dry_run {
                println!("[dry-run] {} not written", plot.display());
            } else {
                write_plot(plot, &updated)?;
            }
        }
        LaborOutcome::Blocked { suggested, reason } => {
            println!(
                "{}: suggested '{}' was not applied",
                record.plot_id,
                suggested.label()
            );
            println!("{}", reason);
        }
    }
    Ok(())
}
