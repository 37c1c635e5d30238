//! Status change logic
//!
//! Pure functions that validate a requested change against the transition
//! rules and produce an updated copy of the plot record. Two entry points:
//! a direct change, and a propose/confirm flow for interactive callers.

use serde::{Deserialize, Serialize};

use crate::errors::{PlotcycleError, Result};
use crate::schemas::{PlotStatus, PlotStatusRecord};

use super::validation::{explain, validate_transition};

/// Result of a status change attempt
#[derive(Debug)]
pub enum TransitionResult {
    /// Successful change with the updated record
    Success {
        /// The record with new status, timestamp and reason
        next_record: PlotStatusRecord,
    },
    /// Rejected change with the diagnostic message
    Error {
        /// Description of why the change was rejected
        error: String,
    },
}

impl TransitionResult {
    /// Check if the change was applied
    pub fn is_success(&self) -> bool {
        matches!(self, TransitionResult::Success { .. })
    }

    /// Check if the change was rejected
    pub fn is_error(&self) -> bool {
        matches!(self, TransitionResult::Error { .. })
    }

    /// Get the updated record if the change was applied
    pub fn record(self) -> Option<PlotStatusRecord> {
        match self {
            TransitionResult::Success { next_record } => Some(next_record),
            TransitionResult::Error { .. } => None,
        }
    }

    /// Get the error message if the change was rejected
    pub fn error(self) -> Option<String> {
        match self {
            TransitionResult::Success { .. } => None,
            TransitionResult::Error { error } => Some(error),
        }
    }

    /// Convert into a `Result`, mapping rejection to `StateTransition`
    pub fn into_result(self) -> Result<PlotStatusRecord> {
        match self {
            TransitionResult::Success { next_record } => Ok(next_record),
            TransitionResult::Error { error } => Err(PlotcycleError::StateTransition(error)),
        }
    }
}

/// Apply a status change to a plot record.
///
/// Never mutates the input. On success the returned record carries the new
/// status, the current time and `reason`.
pub fn apply_status_change(
    record: &PlotStatusRecord,
    next: PlotStatus,
    reason: &str,
) -> TransitionResult {
    let validation = validate_transition(record.status, next);
    if !validation.valid {
        tracing::debug!(
            plot = %record.plot_id,
            from = %record.status,
            to = %next,
            "status change rejected"
        );
        return TransitionResult::Error {
            error: validation
                .reason
                .unwrap_or_else(|| "Status change validation failed".to_string()),
        };
    }

    let next_record = record.clone().with_status(next, reason);
    tracing::info!(
        plot = %record.plot_id,
        from = %record.status,
        to = %next,
        reason,
        "plot status changed"
    );

    TransitionResult::Success { next_record }
}

/// Answer to a proposed status change, shown to the user before confirming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeProposal {
    pub plot_id: String,
    pub plot_name: String,
    pub current: PlotStatus,
    pub proposed: PlotStatus,
    pub reason: String,

    /// False when the change is illegal; the message then explains why
    pub requires_confirmation: bool,

    pub message: String,

    /// What entering the proposed status implies (empty when rejected)
    #[serde(default)]
    pub consequences: Vec<String>,

    pub can_cancel: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_action: Option<String>,
}

/// The user's answer to a [`ChangeProposal`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeConfirmation {
    pub plot_id: String,
    pub proposed: PlotStatus,
    pub reason: String,
    pub confirmed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ChangeConfirmation {
    /// Confirmation accepting the given proposal as-is
    pub fn accept(proposal: &ChangeProposal) -> Self {
        ChangeConfirmation {
            plot_id: proposal.plot_id.clone(),
            proposed: proposal.proposed,
            reason: proposal.reason.clone(),
            confirmed: true,
            notes: None,
        }
    }
}

/// Propose a status change without applying it.
pub fn propose_change(record: &PlotStatusRecord, next: PlotStatus, reason: &str) -> ChangeProposal {
    let validation = validate_transition(record.status, next);

    let (requires_confirmation, message, consequences, required_action) = if validation.valid {
        (
            true,
            confirmation_message(record, next, reason),
            consequences(next),
            Some("Do you want to confirm this status change?".to_string()),
        )
    } else {
        let diagnostic = validation
            .reason
            .unwrap_or_else(|| explain(record.status, next));
        (false, format!("Invalid status change\n\n{}", diagnostic), Vec::new(), None)
    };

    ChangeProposal {
        plot_id: record.plot_id.clone(),
        plot_name: record.name.clone(),
        current: record.status,
        proposed: next,
        reason: reason.to_string(),
        requires_confirmation,
        message,
        consequences,
        can_cancel: requires_confirmation,
        required_action,
    }
}

/// Apply a confirmed change.
///
/// The change is validated again against the record's current status, since
/// the plot may have moved on since the proposal was made.
pub fn confirm_change(
    record: &PlotStatusRecord,
    confirmation: &ChangeConfirmation,
) -> Result<PlotStatusRecord> {
    if !confirmation.confirmed {
        return Err(PlotcycleError::NotConfirmed);
    }

    if confirmation.plot_id != record.plot_id {
        return Err(PlotcycleError::PlotMismatch {
            expected: record.plot_id.clone(),
            actual: confirmation.plot_id.clone(),
        });
    }

    let reason = match confirmation.notes.as_deref() {
        Some(notes) if !notes.trim().is_empty() => {
            format!("{} ({})", confirmation.reason, notes.trim())
        }
        _ => confirmation.reason.clone(),
    };

    apply_status_change(record, confirmation.proposed, &reason).into_result()
}

/// Consequences of entering `status`, listed in proposals.
pub fn consequences(status: PlotStatus) -> Vec<String> {
    let lines: &[&str] = match status {
        PlotStatus::Available => &[
            "The plot will be available for use",
            "It can be assigned to new crops",
        ],
        PlotStatus::Prepared => &[
            "The plot will be ready for sowing",
            "Preparation labors can be scheduled",
        ],
        PlotStatus::Sown => &[
            "A new crop cycle will start",
            "Maintenance labors can be scheduled",
            "The expected harvest date will be estimated",
        ],
        PlotStatus::Growing => &[
            "Crop development will be monitored",
            "Fertilization labors can be scheduled",
        ],
        PlotStatus::Flowering => &[
            "Flowering will be monitored",
            "Pollination labors can be scheduled",
        ],
        PlotStatus::Fruiting => &[
            "Fruit development will be monitored",
            "Protection labors can be scheduled",
        ],
        PlotStatus::ReadyToHarvest => &[
            "The harvest labor can be scheduled",
            "The expected yield will be estimated",
        ],
        PlotStatus::Harvesting => &[
            "Harvest labors will be recorded",
            "The actual yield will be calculated",
        ],
        PlotStatus::Harvested => &[
            "The current crop cycle will be closed",
            "The plot will move to rest",
            "The next cycle can be planned",
        ],
        PlotStatus::Resting => &[
            "No new labors can be recorded",
            "A soil rest period will be recommended",
        ],
        PlotStatus::InPreparation => &[
            "Preparation labors are under way",
            "The soil will be prepared for sowing",
        ],
        PlotStatus::Diseased => &[
            "The crop problem will be recorded",
            "A specific treatment will be recommended",
        ],
        PlotStatus::Abandoned => &[
            "The plot will not be used for now",
            "A review is required before reusing it",
        ],
    };

    lines.iter().map(|line| line.to_string()).collect()
}

fn confirmation_message(record: &PlotStatusRecord, next: PlotStatus, reason: &str) -> String {
    let mut message = String::from("Proposed status change\n\n");
    message.push_str(&format!("Plot: {}\n", record.name));
    message.push_str(&format!("Current status: {}\n", record.status.label()));
    message.push_str(&format!("Proposed status: {}\n", next.label()));
    message.push_str(&format!("Reason: {}\n\n", reason));
    message.push_str(&format!("{}.\n", next.detail()));
    message
}
