//! Apply command - Change the status of a plot record file

use std::path::Path;

use crate::domain::{apply_status_change, propose_change};
use crate::errors::{PlotcycleError, Result};
use crate::fs::{read_plot, write_plot};

use super::parse_status;

/// Apply a requested status change to the plot stored at `plot`.
///
/// With `dry_run` the proposal is printed and nothing is written.
pub fn run(plot: &Path, to: &str, reason: &str, dry_run: bool) -> Result<()> {
    let record = read_plot(plot)?;
    let next = parse_status(to)?;

    if dry_run {
        let proposal = propose_change(&record, next, reason);
        if !proposal.requires_confirmation {
            return Err(PlotcycleError::StateTransition(proposal.message));
        }
        println!("{}", proposal.message);
        for consequence in &proposal.consequences {
            println!("  - {}", consequence);
        }
        println!("[dry-run] {} not written", plot.display());
        return Ok(());
    }

    let updated = apply_status_change(&record, next, reason).into_result()?;
    write_plot(plot, &updated)?;

    println!(
        "{}: {} -> {}",
        updated.plot_id,
        record.status.label(),
        updated.status.label()
    );
    Ok(())
}
