//! Validation rules and diagnostics for status changes

use crate::schemas::PlotStatus;

use super::states::{is_valid_transition, valid_destinations};

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Build the user-facing message for a rejected status change.
///
/// Names the attempted change and lists the statuses reachable from
/// `current` by label. Meant to follow a negative [`is_valid_transition`],
/// but returns a message for any input.
pub fn explain(
    current: impl Into<Option<PlotStatus>>,
    next: impl Into<Option<PlotStatus>>,
) -> String {
    let Some(current) = current.into() else {
        return "Invalid status: the current status of the plot is unknown.".to_string();
    };

    let mut message = match next.into() {
        Some(next) => format!(
            "Cannot change from '{}' to '{}'.\n\n",
            current.label(),
            next.label()
        ),
        None => format!(
            "Cannot change from '{}' to an unknown status.\n\n",
            current.label()
        ),
    };

    let destinations = valid_destinations(current);
    if destinations.is_empty() {
        message.push_str("No valid transitions from this status.");
    } else {
        message.push_str(&format!("Valid statuses from '{}':\n", current.label()));
        for status in destinations {
            message.push_str("• ");
            message.push_str(status.label());
            message.push('\n');
        }
    }

    message
}

/// Validate a status change, carrying the diagnostic on failure
pub fn validate_transition(
    current: impl Into<Option<PlotStatus>>,
    next: impl Into<Option<PlotStatus>>,
) -> ValidationResult {
    let current = current.into();
    let next = next.into();

    if is_valid_transition(current, next) {
        ValidationResult::success()
    } else {
        ValidationResult::failure(explain(current, next))
    }
}
