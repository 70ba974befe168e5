//! Charts module - Chart drawing and colours

pub mod palette;
mod plotter;

pub use plotter::{CategoryBar, ChartPlotter, PieSlice, CHART_HEIGHT};
