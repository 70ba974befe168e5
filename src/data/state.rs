//! Dashboard State Module
//! Holds the loaded datasets for the session and decides which load result
//! is allowed to land.

use crate::data::loader::{LoadError, LoadedData};
use crate::stats::SummaryStats;
use tracing::{debug, error};

/// Every dataset the charts read, plus the load status.
#[derive(Debug, Clone, PartialEq)]
pub struct DataBundle {
    pub data: LoadedData,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for DataBundle {
    fn default() -> Self {
        Self {
            data: LoadedData::default(),
            loading: true,
            error: None,
        }
    }
}

/// Session state: the bundle, its summary, and the load generation counter.
///
/// Each load attempt gets a generation from [`DashboardState::begin_load`].
/// Only the result tagged with the latest generation is applied, so a slow
/// attempt that finishes after a retry cannot overwrite newer data.
#[derive(Debug, Default)]
pub struct DashboardState {
    bundle: DataBundle,
    stats: SummaryStats,
    latest_generation: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bundle(&self) -> &DataBundle {
        &self.bundle
    }

    pub fn stats(&self) -> &SummaryStats {
        &self.stats
    }

    pub fn is_loading(&self) -> bool {
        self.bundle.loading
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    /// Start a new load attempt and return its generation.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_generation += 1;
        self.bundle.loading = true;
        self.bundle.error = None;
        self.latest_generation
    }

    /// Apply a finished load. Returns false if the result was stale.
    pub fn apply(&mut self, generation: u64, result: Result<LoadedData, LoadError>) -> bool {
        if generation != self.latest_generation {
            debug!(
                generation,
                latest = self.latest_generation,
                "dropping stale load result"
            );
            return false;
        }

        match result {
            Ok(data) => {
                self.stats = SummaryStats::from_data(&data);
                self.bundle = DataBundle {
                    data,
                    loading: false,
                    error: None,
                };
            }
            Err(e) => {
                error!(error = %e, "dashboard load failed");
                self.stats = SummaryStats::from_data(&LoadedData::default());
                self.bundle = DataBundle {
                    data: LoadedData::default(),
                    loading: false,
                    error: Some(e.to_string()),
                };
            }
        }

        true
    }
}
