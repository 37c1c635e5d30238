//! Next command - Show the legal next statuses of a status

use crate::domain::valid_destinations;
use crate::errors::{PlotcycleError, Result};

use super::parse_status;

pub fn run(status: &str, json: bool) -> Result<()> {
    let status = parse_status(status)?;
    let next = valid_destinations(status);

    if json {
        let out = serde_json::to_string_pretty(&next)
            .map_err(|e| PlotcycleError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    println!("From '{}' ({}):", status.label(), status);
    for destination in next {
        println!("  {:<20} {}", destination, destination.label());
    }
    Ok(())
}
