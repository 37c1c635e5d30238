//! Plotcycle - lifecycle state machine for cultivation plots
//!
//! This library provides:
//! - The closed catalog of plot statuses and their classifications
//! - The transition rules engine deciding which status changes are legal
//! - Status change proposals, confirmations and labor-driven automatic changes
//! - Configuration and JSON record utilities used by the `plotcycle` CLI

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use errors::{PlotcycleError, Result};
pub use schemas::{LaborKind, LifecycleConfig, PlotStatus, PlotStatusRecord};
