//! Data module - dataset records, sources, loading and session state

pub mod loader;
pub mod records;
pub mod source;
mod state;

pub use loader::{DataLoader, DatasetKind, LoadError, LoadedData};
pub use records::{
    BatsmanSeasonRecord, BowlerRecord, DismissalRecord, Loose, MatchRecord, TeamTossRecord,
    TossOutcomeRecord, VenueScoreRecord, WinRunsRecord,
};
pub use source::{source_for, DataSource, DirSource, FetchError, HttpSource};
pub use state::{DashboardState, DataBundle};
