//! Check command - Validate a status change without applying it

use crate::domain::validate_transition;
use crate::errors::{PlotcycleError, Result};
use crate::schemas::PlotStatus;

/// Check a change between two status arguments.
///
/// Unknown codes are not an error here: they are treated as absent statuses
/// and the change is rejected like any other illegal one.
pub fn run(from: &str, to: &str) -> Result<()> {
    let current = from.parse::<PlotStatus>().ok();
    let next = to.parse::<PlotStatus>().ok();

    let validation = validate_transition(current, next);
    if !validation.valid {
        return Err(PlotcycleError::StateTransition(
            validation.reason.unwrap_or_default(),
        ));
    }

    println!("ok: {} -> {}", from, to);
    Ok(())
}
