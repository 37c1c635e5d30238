//! Labor-driven automatic status changes
//!
//! Recording a field labor may move a plot to its next status: preparation
//! labors finish preparing it, time since sowing advances the crop phases,
//! treatments recover a diseased crop. Sowing and harvest labors are owned
//! by their own flows and never suggest a change here.
//!
//! Suggestions still go through the transition rules. A suggestion the
//! table does not allow is reported as blocked instead of being applied.

use chrono::NaiveDate;

use crate::schemas::{LaborHistory, LaborKind, LifecycleConfig, PlotStatus, PlotStatusRecord};

use super::states::is_valid_transition;
use super::transitions::apply_status_change;

/// Outcome of evaluating a recorded labor against a plot
#[derive(Debug, Clone, PartialEq)]
pub enum LaborOutcome {
    /// No rule fired, or the suggestion equals the current status
    Unchanged,
    /// The suggested change was legal and has been applied to the returned record
    Applied(PlotStatusRecord),
    /// A rule fired but the transition rules do not allow the change
    Blocked {
        suggested: PlotStatus,
        reason: String,
    },
}

impl LaborOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LaborOutcome::Applied(_))
    }
}

/// Status a plot should move to after `labor`, by the agronomic rules alone.
///
/// `history` lists the completed labors of the plot including `labor`.
pub fn suggest_status(
    record: &PlotStatusRecord,
    labor: LaborKind,
    history: &LaborHistory,
    today: NaiveDate,
    config: &LifecycleConfig,
) -> Option<PlotStatus> {
    if matches!(labor, LaborKind::Sowing | LaborKind::Harvest) {
        return None;
    }

    let days_sown = record.days_since_sowing(today);
    let growth = &config.growth;

    match record.status {
        PlotStatus::Available => match labor {
            LaborKind::Maintenance | LaborKind::Fertilization => Some(PlotStatus::InPreparation),
            _ => None,
        },
        PlotStatus::InPreparation => {
            let maintenance = history.count(LaborKind::Maintenance);
            let fertilization = history.count(LaborKind::Fertilization);
            let prepared = maintenance >= config.preparation.min_maintenance
                || (maintenance >= 1 && fertilization >= 1);
            prepared.then_some(PlotStatus::Prepared)
        }
        PlotStatus::Sown => {
            let days = days_sown?;
            let early_labor = matches!(labor, LaborKind::Irrigation | LaborKind::Fertilization);
            let grown = days >= growth.growing_after_days
                || (days >= growth.early_growing_after_days && early_labor);
            grown.then_some(PlotStatus::Growing)
        }
        PlotStatus::Growing => days_sown
            .filter(|&days| days >= growth.flowering_after_days)
            .map(|_| PlotStatus::Flowering),
        PlotStatus::Flowering => days_sown
            .filter(|&days| days >= growth.fruiting_after_days)
            .map(|_| PlotStatus::Fruiting),
        PlotStatus::Fruiting => days_sown
            .filter(|&days| days >= growth.ready_after_days)
            .map(|_| PlotStatus::ReadyToHarvest),
        PlotStatus::Harvested | PlotStatus::Abandoned => {
            (labor == LaborKind::Maintenance).then_some(PlotStatus::InPreparation)
        }
        PlotStatus::Resting => {
            let rested = record
                .days_since_harvest(today)
                .is_some_and(|days| days >= config.rest_days);
            (rested && labor == LaborKind::Maintenance).then_some(PlotStatus::InPreparation)
        }
        PlotStatus::Diseased => {
            if history.treatments() < config.recovery.min_treatments {
                return None;
            }
            days_sown.map(|days| recovery_status(days, config))
        }
        PlotStatus::Prepared | PlotStatus::ReadyToHarvest | PlotStatus::Harvesting => None,
    }
}

/// Phase a treated crop returns to, by days since sowing
fn recovery_status(days_since_sowing: i64, config: &LifecycleConfig) -> PlotStatus {
    let recovery = &config.recovery;
    if days_since_sowing < recovery.sown_until_days {
        PlotStatus::Sown
    } else if days_since_sowing < recovery.growing_until_days {
        PlotStatus::Growing
    } else if days_since_sowing < recovery.flowering_until_days {
        PlotStatus::Flowering
    } else if days_since_sowing < recovery.fruiting_until_days {
        PlotStatus::Fruiting
    } else {
        PlotStatus::ReadyToHarvest
    }
}

/// Evaluate a recorded labor and apply the resulting change when it is legal.
pub fn evaluate_labor(
    record: &PlotStatusRecord,
    labor: LaborKind,
    history: &LaborHistory,
    today: NaiveDate,
    config: &LifecycleConfig,
) -> LaborOutcome {
    let Some(suggested) = suggest_status(record, labor, history, today, config) else {
        return LaborOutcome::Unchanged;
    };

    if suggested == record.status {
        return LaborOutcome::Unchanged;
    }

    if !is_valid_transition(record.status, suggested) {
        tracing::warn!(
            plot = %record.plot_id,
            from = %record.status,
            suggested = %suggested,
            labor = %labor,
            "automatic change not allowed by transition rules"
        );
        return LaborOutcome::Blocked {
            suggested,
            reason: super::validation::explain(record.status, suggested),
        };
    }

    let reason = format!("Automatic change after labor: {}", labor.code());
    match apply_status_change(record, suggested, &reason).record() {
        Some(next) => LaborOutcome::Applied(next),
        None => LaborOutcome::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 30)
    }

    fn record(status: PlotStatus) -> PlotStatusRecord {
        PlotStatusRecord::new("lot-1", "North field").with_status(status, "setup")
    }

    fn sown_days_ago(status: PlotStatus, days: i64) -> PlotStatusRecord {
        record(status).with_sown_on(Some(today() - chrono::Duration::days(days)))
    }

    fn history(kinds: &[LaborKind]) -> LaborHistory {
        LaborHistory::new(kinds.to_vec())
    }

    fn suggest(
        plot: &PlotStatusRecord,
        labor: LaborKind,
        kinds: &[LaborKind],
    ) -> Option<PlotStatus> {
        let config = LifecycleConfig::default();
        suggest_status(plot, labor, &history(kinds), today(), &config)
    }

    /// Suggestion for a labor with no earlier history, `days` after sowing
    fn after_days(status: PlotStatus, days: i64, labor: LaborKind) -> Option<PlotStatus> {
        suggest(&sown_days_ago(status, days), labor, &[])
    }

    #[test]
    fn test_available_starts_preparation() {
        let plot = record(PlotStatus::Available);
        assert_eq!(
            suggest(&plot, LaborKind::Maintenance, &[LaborKind::Maintenance]),
            Some(PlotStatus::InPreparation)
        );
        assert_eq!(
            suggest(&plot, LaborKind::Fertilization, &[LaborKind::Fertilization]),
            Some(PlotStatus::InPreparation)
        );
        let irrigated = suggest(&plot, LaborKind::Irrigation, &[LaborKind::Irrigation]);
        assert_eq!(irrigated, None);
    }

    #[test]
    fn test_in_preparation_completes() {
        let plot = record(PlotStatus::InPreparation);
        let once = suggest(&plot, LaborKind::Maintenance, &[LaborKind::Maintenance]);
        assert_eq!(once, None);
        assert_eq!(
            suggest(
                &plot,
                LaborKind::Maintenance,
                &[LaborKind::Maintenance, LaborKind::Maintenance]
            ),
            Some(PlotStatus::Prepared)
        );
        assert_eq!(
            suggest(
                &plot,
                LaborKind::Fertilization,
                &[LaborKind::Maintenance, LaborKind::Fertilization]
            ),
            Some(PlotStatus::Prepared)
        );
    }

    #[test]
    fn test_sown_advances_by_days_or_early_labor() {
        let sown = PlotStatus::Sown;
        assert_eq!(
            after_days(sown, 15, LaborKind::Pruning),
            Some(PlotStatus::Growing)
        );
        assert_eq!(after_days(sown, 10, LaborKind::Pruning), None);
        assert_eq!(
            after_days(sown, 7, LaborKind::Irrigation),
            Some(PlotStatus::Growing)
        );
        assert_eq!(after_days(sown, 6, LaborKind::Irrigation), None);

        let undated = record(PlotStatus::Sown);
        assert_eq!(suggest(&undated, LaborKind::Irrigation, &[]), None);
    }

    #[test]
    fn test_crop_phases_follow_days_since_sowing() {
        let other = LaborKind::Other;
        assert_eq!(after_days(PlotStatus::Growing, 44, other), None);
        assert_eq!(
            after_days(PlotStatus::Growing, 45, other),
            Some(PlotStatus::Flowering)
        );
        assert_eq!(
            after_days(PlotStatus::Flowering, 65, other),
            Some(PlotStatus::Fruiting)
        );
        assert_eq!(
            after_days(PlotStatus::Fruiting, 100, other),
            Some(PlotStatus::ReadyToHarvest)
        );
        assert_eq!(after_days(PlotStatus::Fruiting, 99, other), None);
    }

    #[test]
    fn test_sowing_and_harvest_labors_never_suggest() {
        let plot = sown_days_ago(PlotStatus::Fruiting, 200);
        assert_eq!(suggest(&plot, LaborKind::Harvest, &[]), None);
        let available = record(PlotStatus::Available);
        assert_eq!(suggest(&available, LaborKind::Sowing, &[]), None);
    }

    #[test]
    fn test_post_harvest_preparation() {
        let harvested = record(PlotStatus::Harvested);
        assert_eq!(
            suggest(&harvested, LaborKind::Maintenance, &[]),
            Some(PlotStatus::InPreparation)
        );
        assert_eq!(suggest(&harvested, LaborKind::Irrigation, &[]), None);

        let rested = record(PlotStatus::Resting).with_harvested_on(Some(date(2024, 5, 31)));
        assert_eq!(
            suggest(&rested, LaborKind::Maintenance, &[]),
            Some(PlotStatus::InPreparation)
        );
        let too_soon = record(PlotStatus::Resting).with_harvested_on(Some(date(2024, 6, 10)));
        assert_eq!(suggest(&too_soon, LaborKind::Maintenance, &[]), None);
        let never_harvested = record(PlotStatus::Resting);
        assert_eq!(suggest(&never_harvested, LaborKind::Maintenance, &[]), None);
    }

    #[test]
    fn test_diseased_recovery_bands() {
        let treated = [LaborKind::PestControl, LaborKind::WeedControl];
        let cases = [
            (10, PlotStatus::Sown),
            (30, PlotStatus::Growing),
            (59, PlotStatus::Growing),
            (60, PlotStatus::Flowering),
            (80, PlotStatus::Fruiting),
            (110, PlotStatus::ReadyToHarvest),
        ];
        for (days, expected) in cases {
            let plot = sown_days_ago(PlotStatus::Diseased, days);
            let suggested = suggest(&plot, LaborKind::PestControl, &treated);
            assert_eq!(suggested, Some(expected), "{days} days");
        }

        let plot = sown_days_ago(PlotStatus::Diseased, 40);
        let once = suggest(&plot, LaborKind::PestControl, &[LaborKind::PestControl]);
        assert_eq!(once, None);
    }

    #[test]
    fn test_abandoned_reactivation() {
        assert_eq!(
            suggest(&record(PlotStatus::Abandoned), LaborKind::Maintenance, &[]),
            Some(PlotStatus::InPreparation)
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let mut config = LifecycleConfig::default();
        config.growth.flowering_after_days = 30;

        let plot = sown_days_ago(PlotStatus::Growing, 31);
        let history = LaborHistory::default();
        let suggested = suggest_status(&plot, LaborKind::Other, &history, today(), &config);
        assert_eq!(suggested, Some(PlotStatus::Flowering));
    }

    #[test]
    fn test_evaluate_applies_legal_suggestion() {
        let plot = sown_days_ago(PlotStatus::Sown, 20);
        let outcome = evaluate_labor(
            &plot,
            LaborKind::Irrigation,
            &history(&[LaborKind::Irrigation]),
            today(),
            &LifecycleConfig::default(),
        );

        match outcome {
            LaborOutcome::Applied(next) => {
                assert_eq!(next.status, PlotStatus::Growing);
                assert_eq!(
                    next.change_reason.as_deref(),
                    Some("Automatic change after labor: RIEGO")
                );
            }
            other => panic!("expected Applied, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_blocks_suggestion_outside_table() {
        // Available -> InPreparation is suggested by the labor rules but not allowed
        let plot = record(PlotStatus::Available);
        let outcome = evaluate_labor(
            &plot,
            LaborKind::Maintenance,
            &history(&[LaborKind::Maintenance]),
            today(),
            &LifecycleConfig::default(),
        );

        match outcome {
            LaborOutcome::Blocked { suggested, reason } => {
                assert_eq!(suggested, PlotStatus::InPreparation);
                assert!(reason.contains("• Prepared for sowing"));
            }
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn test_evaluate_blocks_recovery_to_sown() {
        let plot = sown_days_ago(PlotStatus::Diseased, 5);
        let outcome = evaluate_labor(
            &plot,
            LaborKind::PestControl,
            &history(&[LaborKind::PestControl, LaborKind::PestControl]),
            today(),
            &LifecycleConfig::default(),
        );
        assert!(matches!(
            outcome,
            LaborOutcome::Blocked {
                suggested: PlotStatus::Sown,
                ..
            }
        ));
    }

    #[test]
    fn test_evaluate_unchanged() {
        let plot = record(PlotStatus::Prepared);
        let outcome = evaluate_labor(
            &plot,
            LaborKind::Maintenance,
            &history(&[LaborKind::Maintenance]),
            today(),
            &LifecycleConfig::default(),
        );
        assert_eq!(outcome, LaborOutcome::Unchanged);
        assert!(!outcome.is_applied());
    }
}
