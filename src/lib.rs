//! IPL Insights - cricket statistics dashboard
//!
//! Loads precomputed IPL datasets from a directory or base URL and derives
//! the chart series the dashboard draws.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod stats;
