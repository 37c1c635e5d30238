//! Attention command - Report whether a plot needs attention

use std::path::Path;

use chrono::NaiveDate;

use crate::domain::requires_attention;
use crate::errors::Result;
use crate::fs::read_plot;
use crate::schemas::LifecycleConfig;

use super::resolve_today;

pub fn run(plot: &Path, today: Option<NaiveDate>, config: &LifecycleConfig) -> Result<()> {
    let record = read_plot(plot)?;
    let today = resolve_today(today);

    if requires_attention(&record, today, config) {
        println!(
            "{}: needs attention ({}, {} days since last change)",
            record.plot_id,
            record.status.label(),
            record.days_since_last_change(today)
        );
    } else {
        println!("{}: ok ({})", record.plot_id, record.status.label());
    }
    Ok(())
}
