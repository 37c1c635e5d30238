//! Catalog and plot queries

use std::collections::{BTreeSet, VecDeque};

use chrono::NaiveDate;

use crate::schemas::{LifecycleConfig, PlotStatus, PlotStatusRecord};

use super::states::{valid_destinations, PLOT_STATUSES};

/// Catalog statuses matching `predicate`, in canonical order.
pub fn statuses_where(predicate: impl Fn(PlotStatus) -> bool) -> Vec<PlotStatus> {
    PLOT_STATUSES
        .iter()
        .copied()
        .filter(|&s| predicate(s))
        .collect()
}

/// Every status reachable from `start` through one or more legal transitions.
///
/// `start` itself is included only if some cycle leads back to it.
pub fn reachable_from(start: PlotStatus) -> BTreeSet<PlotStatus> {
    let mut seen = BTreeSet::new();
    let mut queue: VecDeque<PlotStatus> = valid_destinations(start).into();

    while let Some(status) = queue.pop_front() {
        if seen.insert(status) {
            queue.extend(valid_destinations(status));
        }
    }

    seen
}

/// Whether the plot needs attention on `today`.
///
/// Diseased and abandoned plots always do; a plot left ready to harvest
/// for longer than the configured period does too.
pub fn requires_attention(
    record: &PlotStatusRecord,
    today: NaiveDate,
    config: &LifecycleConfig,
) -> bool {
    if record.status == PlotStatus::ReadyToHarvest {
        return record.days_since_last_change(today) > config.harvest_overdue_days;
    }
    record.status.needs_attention()
}

pub fn plots_in_status(
    records: &[PlotStatusRecord],
    status: PlotStatus,
) -> Vec<&PlotStatusRecord> {
    records.iter().filter(|r| r.status == status).collect()
}

/// Plots that can be sown right away (available or prepared)
pub fn plots_ready_for_sowing(records: &[PlotStatusRecord]) -> Vec<&PlotStatusRecord> {
    records
        .iter()
        .filter(|r| matches!(r.status, PlotStatus::Available | PlotStatus::Prepared))
        .collect()
}

pub fn plots_ready_for_harvest(records: &[PlotStatusRecord]) -> Vec<&PlotStatusRecord> {
    plots_in_status(records, PlotStatus::ReadyToHarvest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_statuses_where() {
        assert_eq!(
            statuses_where(PlotStatus::needs_attention),
            vec![PlotStatus::Diseased, PlotStatus::Abandoned]
        );
        assert_eq!(statuses_where(|_| false), Vec::<PlotStatus>::new());
        assert_eq!(statuses_where(|_| true), PLOT_STATUSES);
    }

    #[test]
    fn test_every_status_reachable_from_available() {
        let reachable = reachable_from(PlotStatus::Available);
        for status in PLOT_STATUSES {
            assert!(reachable.contains(status), "{status} unreachable");
        }
    }

    #[test]
    fn test_available_reachable_from_every_status() {
        for &status in PLOT_STATUSES {
            assert!(
                reachable_from(status).contains(&PlotStatus::Available),
                "Available unreachable from {status}"
            );
        }
    }

    #[test]
    fn test_abandoned_reaches_only_through_preparation() {
        assert_eq!(
            valid_destinations(PlotStatus::Abandoned),
            vec![PlotStatus::InPreparation]
        );
        assert_eq!(
            reachable_from(PlotStatus::Abandoned),
            reachable_from(PlotStatus::InPreparation)
        );
        assert!(reachable_from(PlotStatus::Abandoned).contains(&PlotStatus::Abandoned));
    }

    #[test]
    fn test_requires_attention() {
        let config = LifecycleConfig::default();
        let today = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        let plot = PlotStatusRecord::new("lot-1", "North");

        assert!(!requires_attention(&plot, today, &config));
        let diseased = plot.clone().with_status(PlotStatus::Diseased, "rust");
        assert!(requires_attention(&diseased, today, &config));
        let abandoned = plot.clone().with_status(PlotStatus::Abandoned, "flood");
        assert!(requires_attention(&abandoned, today, &config));

        let ready_at = |d: u32| {
            plot.clone().with_status_at(
                PlotStatus::ReadyToHarvest,
                "mature",
                Utc.with_ymd_and_hms(2024, 4, d, 8, 0, 0).unwrap(),
            )
        };
        assert!(!requires_attention(&ready_at(5), today, &config));
        assert!(requires_attention(&ready_at(4), today, &config));
    }

    #[test]
    fn test_plot_filters() {
        let records = vec![
            PlotStatusRecord::new("a", "A"),
            PlotStatusRecord::new("b", "B").with_status(PlotStatus::Prepared, "ready"),
            PlotStatusRecord::new("c", "C").with_status(PlotStatus::InPreparation, "ploughing"),
            PlotStatusRecord::new("d", "D").with_status(PlotStatus::ReadyToHarvest, "mature"),
        ];

        let ids = |found: Vec<&PlotStatusRecord>| {
            found
                .iter()
                .map(|r| r.plot_id.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(ids(plots_ready_for_sowing(&records)), vec!["a", "b"]);
        assert_eq!(ids(plots_ready_for_harvest(&records)), vec!["d"]);
        assert_eq!(
            ids(plots_in_status(&records, PlotStatus::InPreparation)),
            vec!["c"]
        );
        assert!(plots_in_status(&records, PlotStatus::Diseased).is_empty());
    }
}
