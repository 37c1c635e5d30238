//! File system utilities for plotcycle
//!
//! JSON reading and atomic writing of configuration and plot records.

mod json;

pub use json::{read_json, read_plot, write_json, write_plot};
