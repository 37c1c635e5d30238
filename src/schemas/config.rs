//! Config schema - thresholds for labor-driven changes and attention alerts

use serde::{Deserialize, Serialize};

/// Days since sowing at which a growing crop moves to its next phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthThresholds {
    /// Sown → Growing when irrigation or fertilization is recorded
    #[serde(default = "default_early_growing_after_days")]
    pub early_growing_after_days: i64,

    /// Sown → Growing on any labor
    #[serde(default = "default_growing_after_days")]
    pub growing_after_days: i64,

    #[serde(default = "default_flowering_after_days")]
    pub flowering_after_days: i64,

    #[serde(default = "default_fruiting_after_days")]
    pub fruiting_after_days: i64,

    #[serde(default = "default_ready_after_days")]
    pub ready_after_days: i64,
}

/// Recovery rules for a diseased crop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryThresholds {
    /// Completed pest/weed control labors needed to consider the crop recovered
    #[serde(default = "default_min_treatments")]
    pub min_treatments: usize,

    /// Below these day counts since sowing the crop recovers into the named phase
    #[serde(default = "default_sown_until_days")]
    pub sown_until_days: i64,

    #[serde(default = "default_growing_until_days")]
    pub growing_until_days: i64,

    #[serde(default = "default_flowering_until_days")]
    pub flowering_until_days: i64,

    #[serde(default = "default_fruiting_until_days")]
    pub fruiting_until_days: i64,
}

/// Labors needed to finish preparing a plot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparationThresholds {
    /// Maintenance labors that complete preparation on their own
    #[serde(default = "default_min_maintenance")]
    pub min_maintenance: usize,
}

/// Main configuration for plotcycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleConfig {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub growth: GrowthThresholds,

    #[serde(default)]
    pub recovery: RecoveryThresholds,

    #[serde(default)]
    pub preparation: PreparationThresholds,

    /// Rest period after harvest before maintenance starts re-preparation
    #[serde(default = "default_rest_days")]
    pub rest_days: i64,

    /// Days a plot may stay ready to harvest before it needs attention
    #[serde(default = "default_harvest_overdue_days")]
    pub harvest_overdue_days: i64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_early_growing_after_days() -> i64 {
    7
}

fn default_growing_after_days() -> i64 {
    15
}

fn default_flowering_after_days() -> i64 {
    45
}

fn default_fruiting_after_days() -> i64 {
    65
}

fn default_ready_after_days() -> i64 {
    100
}

fn default_min_treatments() -> usize {
    2
}

fn default_sown_until_days() -> i64 {
    30
}

fn default_growing_until_days() -> i64 {
    60
}

fn default_flowering_until_days() -> i64 {
    80
}

fn default_fruiting_until_days() -> i64 {
    110
}

fn default_min_maintenance() -> usize {
    2
}

fn default_rest_days() -> i64 {
    30
}

fn default_harvest_overdue_days() -> i64 {
    15
}

impl Default for GrowthThresholds {
    fn default() -> Self {
        GrowthThresholds {
            early_growing_after_days: default_early_growing_after_days(),
            growing_after_days: default_growing_after_days(),
            flowering_after_days: default_flowering_after_days(),
            fruiting_after_days: default_fruiting_after_days(),
            ready_after_days: default_ready_after_days(),
        }
    }
}

impl Default for RecoveryThresholds {
    fn default() -> Self {
        RecoveryThresholds {
            min_treatments: default_min_treatments(),
            sown_until_days: default_sown_until_days(),
            growing_until_days: default_growing_until_days(),
            flowering_until_days: default_flowering_until_days(),
            fruiting_until_days: default_fruiting_until_days(),
        }
    }
}

impl Default for PreparationThresholds {
    fn default() -> Self {
        PreparationThresholds {
            min_maintenance: default_min_maintenance(),
        }
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        LifecycleConfig {
            schema_version: 1,
            growth: GrowthThresholds::default(),
            recovery: RecoveryThresholds::default(),
            preparation: PreparationThresholds::default(),
            rest_days: 30,
            harvest_overdue_days: 15,
        }
    }
}
