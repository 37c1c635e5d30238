//! Plot lifecycle state machine definitions
//!
//! The transition graph is a compile-time constant: `destinations` is an
//! exhaustive match, so a new status does not compile until its outgoing
//! edges are declared. Every status has at least one outgoing edge.
//!
//! Absent statuses (`None`) are accepted everywhere and fail closed.

use std::collections::BTreeMap;

use crate::schemas::PlotStatus;

/// The canonical ordering of plot statuses.
pub const PLOT_STATUSES: &[PlotStatus] = &[
    PlotStatus::Available,
    PlotStatus::Prepared,
    PlotStatus::Sown,
    PlotStatus::Growing,
    PlotStatus::Flowering,
    PlotStatus::Fruiting,
    PlotStatus::ReadyToHarvest,
    PlotStatus::Harvesting,
    PlotStatus::Harvested,
    PlotStatus::Resting,
    PlotStatus::InPreparation,
    PlotStatus::Diseased,
    PlotStatus::Abandoned,
];

/// Status assigned to a plot when it is created.
pub const INITIAL_STATUS: PlotStatus = PlotStatus::Available;

/// Legal destinations of `status`, in the order they are offered to users.
///
/// The first entry is the most common next step.
fn destinations(status: PlotStatus) -> &'static [PlotStatus] {
    use crate::schemas::PlotStatus::*;

    match status {
        Available => &[Prepared, Sown],
        Prepared => &[Sown, Available],
        Sown => &[Growing, Diseased],
        Growing => &[Flowering, Diseased],
        Flowering => &[Fruiting, Diseased],
        Fruiting => &[ReadyToHarvest, Diseased],
        ReadyToHarvest => &[Harvesting, Diseased],
        Harvesting => &[Harvested, Diseased],
        Harvested => &[Resting, InPreparation],
        Resting => &[InPreparation, Available],
        InPreparation => &[Available, Prepared],
        // Recovery returns the crop to the phase it was in
        Diseased => &[Abandoned, Growing, Flowering, Fruiting],
        Abandoned => &[InPreparation],
    }
}

/// Check whether changing from `current` to `next` is legal.
///
/// Returns false when either status is absent. Self-transitions are never
/// legal since the graph has no self loops.
pub fn is_valid_transition(
    current: impl Into<Option<PlotStatus>>,
    next: impl Into<Option<PlotStatus>>,
) -> bool {
    match (current.into(), next.into()) {
        (Some(current), Some(next)) => destinations(current).contains(&next),
        _ => false,
    }
}

/// Returns the legal next statuses for `current`, in canonical order.
///
/// An absent status has no destinations.
pub fn valid_destinations(current: impl Into<Option<PlotStatus>>) -> Vec<PlotStatus> {
    match current.into() {
        Some(current) => destinations(current).to_vec(),
        None => Vec::new(),
    }
}

/// Check if a status has no legal outgoing transitions.
///
/// No catalog status is terminal; only an absent status is.
pub fn is_terminal(status: impl Into<Option<PlotStatus>>) -> bool {
    match status.into() {
        Some(status) => destinations(status).is_empty(),
        None => true,
    }
}

/// Returns an owned copy of the whole transition table.
pub fn all_transitions() -> BTreeMap<PlotStatus, Vec<PlotStatus>> {
    PLOT_STATUSES
        .iter()
        .map(|&status| (status, destinations(status).to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::PlotStatus::*;

    #[test]
    fn test_plot_statuses_order() {
        assert_eq!(PLOT_STATUSES.len(), 13);
        assert_eq!(PLOT_STATUSES[0], Available);
        assert_eq!(PLOT_STATUSES[6], ReadyToHarvest);
        assert_eq!(PLOT_STATUSES[12], Abandoned);
    }

    #[test]
    fn test_catalog_order_matches_ord() {
        let mut sorted = PLOT_STATUSES.to_vec();
        sorted.sort();
        assert_eq!(sorted, PLOT_STATUSES);
    }

    #[test]
    fn test_initial_status() {
        assert_eq!(INITIAL_STATUS, Available);
        assert_eq!(INITIAL_STATUS, PlotStatus::default());
    }

    #[test]
    fn test_valid_and_invalid_from_available() {
        assert!(is_valid_transition(Available, Prepared));
        assert!(is_valid_transition(Available, Sown));
        assert!(!is_valid_transition(Available, Harvested));
    }

    #[test]
    fn test_self_transitions_are_rejected() {
        for &status in PLOT_STATUSES {
            assert!(!is_valid_transition(status, status), "{status} -> {status}");
        }
    }

    #[test]
    fn test_absent_statuses_fail_closed() {
        assert!(!is_valid_transition(None, Available));
        assert!(!is_valid_transition(Available, None));
        assert!(!is_valid_transition(None, None));
        assert!(valid_destinations(None).is_empty());
        assert!(is_terminal(None));
    }

    #[test]
    fn test_option_arguments() {
        assert!(is_valid_transition(Some(Harvested), Some(Resting)));
        assert_eq!(valid_destinations(Some(Abandoned)), vec![InPreparation]);
    }

    #[test]
    fn test_diseased_destinations_exact_order() {
        assert_eq!(
            valid_destinations(Diseased),
            vec![Abandoned, Growing, Flowering, Fruiting]
        );
    }

    #[test]
    fn test_canonical_table() {
        let expected: Vec<(PlotStatus, Vec<PlotStatus>)> = vec![
            (Available, vec![Prepared, Sown]),
            (Prepared, vec![Sown, Available]),
            (Sown, vec![Growing, Diseased]),
            (Growing, vec![Flowering, Diseased]),
            (Flowering, vec![Fruiting, Diseased]),
            (Fruiting, vec![ReadyToHarvest, Diseased]),
            (ReadyToHarvest, vec![Harvesting, Diseased]),
            (Harvesting, vec![Harvested, Diseased]),
            (Harvested, vec![Resting, InPreparation]),
            (Resting, vec![InPreparation, Available]),
            (InPreparation, vec![Available, Prepared]),
            (Diseased, vec![Abandoned, Growing, Flowering, Fruiting]),
            (Abandoned, vec![InPreparation]),
        ];
        let table = all_transitions();
        assert_eq!(table.len(), 13);
        for (from, to) in expected {
            assert_eq!(table[&from], to, "destinations of {from}");
        }
    }

    #[test]
    fn test_no_terminal_statuses() {
        for &status in PLOT_STATUSES {
            assert!(!is_terminal(status), "{status} must not be terminal");
            assert!(!valid_destinations(status).is_empty());
        }
    }

    #[test]
    fn test_all_transitions_is_a_copy() {
        let mut table = all_transitions();
        table.get_mut(&Available).unwrap().clear();
        table.remove(&Diseased);

        assert_eq!(valid_destinations(Available), vec![Prepared, Sown]);
        assert!(is_valid_transition(Diseased, Abandoned));
        assert_eq!(all_transitions().len(), 13);
    }

    #[test]
    fn test_full_cycle_walk() {
        let cycle = [
            Available,
            Prepared,
            Sown,
            Growing,
            Flowering,
            Fruiting,
            ReadyToHarvest,
            Harvesting,
            Harvested,
            Resting,
            InPreparation,
            Available,
        ];
        for pair in cycle.windows(2) {
            assert!(
                is_valid_transition(pair[0], pair[1]),
                "{} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_recovery_walk() {
        assert!(is_valid_transition(Growing, Diseased));
        assert!(is_valid_transition(Diseased, Growing));
    }

    #[test]
    fn test_abandonment_walk() {
        assert!(is_valid_transition(Diseased, Abandoned));
        assert!(is_valid_transition(Abandoned, InPreparation));
        assert!(!is_valid_transition(Abandoned, Available));
    }

    #[test]
    fn test_abandoned_only_reachable_from_diseased() {
        let sources: Vec<_> = PLOT_STATUSES
            .iter()
            .copied()
            .filter(|&s| is_valid_transition(s, Abandoned))
            .collect();
        assert_eq!(sources, vec![Diseased]);
    }
}
