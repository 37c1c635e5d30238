//! Schema types for plotcycle
//!
//! Wire codes match the values stored by the farm-management database.

mod config;
mod labor;
mod plot;
mod status;

pub use config::{GrowthThresholds, LifecycleConfig, PreparationThresholds, RecoveryThresholds};
pub use labor::{LaborHistory, LaborKind};
pub use plot::PlotStatusRecord;
pub use status::PlotStatus;
