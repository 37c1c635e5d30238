//! Graph command - Print the whole transition table

use crate::domain::all_transitions;
use crate::errors::{PlotcycleError, Result};

pub fn run(json: bool) -> Result<()> {
    let table = all_transitions();

    if json {
        let out = serde_json::to_string_pretty(&table)
            .map_err(|e| PlotcycleError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    for (from, destinations) in &table {
        let targets: Vec<String> = destinations.iter().map(|s| s.to_string()).collect();
        println!("{:<20} -> {}", from, targets.join(", "));
    }
    Ok(())
}
