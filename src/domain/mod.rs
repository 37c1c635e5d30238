//! Domain logic for plot statuses and transitions

mod labor_rules;
mod queries;
mod states;
mod transitions;
mod validation;


pub use labor_rules::{evaluate_labor, suggest_status, LaborOutcome};
pub use queries::{
    plots_in_status, plots_ready_for_harvest, plots_ready_for_sowing, reachable_from,
    requires_attention, statuses_where,
};
pub use states::{
    all_transitions, is_terminal, is_valid_transition, valid_destinations, INITIAL_STATUS,
    PLOT_STATUSES,
};
pub use transitions::{
    apply_status_change, confirm_change, consequences, propose_change, ChangeConfirmation,
    ChangeProposal, TransitionResult,
};
pub use validation::{explain, validate_transition, ValidationResult};
