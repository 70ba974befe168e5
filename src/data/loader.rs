//! Dataset Loader Module
//! Fetches the eight dashboard datasets concurrently and applies the
//! per-dataset failure policy.

use crate::data::records::{
    BatsmanSeasonRecord, BowlerRecord, DismissalRecord, MatchRecord, TeamTossRecord,
    TossOutcomeRecord, VenueScoreRecord, WinRunsRecord,
};
use crate::data::source::{DataSource, FetchError};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Default per-request timeout.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to fetch {}: {source}", .dataset.file_name())]
    Critical {
        dataset: DatasetKind,
        #[source]
        source: FetchError,
    },
    #[error("{} is not a JSON array", .dataset.file_name())]
    NotAnArray { dataset: DatasetKind },
}

/// The eight datasets the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    TopBatsmen,
    EconomicalBowlers,
    TossImpact,
    RunsInWins,
    MatchData,
    ScoresByVenue,
    DismissalTypes,
    TeamTossPerformance,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 8] = [
        DatasetKind::TopBatsmen,
        DatasetKind::EconomicalBowlers,
        DatasetKind::TossImpact,
        DatasetKind::RunsInWins,
        DatasetKind::MatchData,
        DatasetKind::ScoresByVenue,
        DatasetKind::DismissalTypes,
        DatasetKind::TeamTossPerformance,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::TopBatsmen => "topBatsmen.json",
            DatasetKind::EconomicalBowlers => "economicalBowlers.json",
            DatasetKind::TossImpact => "tossImpact.json",
            DatasetKind::RunsInWins => "runsInWins.json",
            DatasetKind::MatchData => "matchData.json",
            DatasetKind::ScoresByVenue => "scoresByVenue.json",
            DatasetKind::DismissalTypes => "dismissalTypes.json",
            DatasetKind::TeamTossPerformance => "teamTossPerformance.json",
        }
    }

    /// A failure on a critical dataset fails the whole load.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            DatasetKind::TopBatsmen
                | DatasetKind::EconomicalBowlers
                | DatasetKind::TossImpact
                | DatasetKind::RunsInWins
        )
    }
}

/// Result of a successful load, already sorted for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedData {
    pub top_batsmen: Vec<BatsmanSeasonRecord>,
    pub economical_bowlers: Vec<BowlerRecord>,
    pub toss_impact: Vec<TossOutcomeRecord>,
    pub runs_in_wins: Vec<WinRunsRecord>,
    pub match_data: Vec<MatchRecord>,
    pub scores_by_venue: Vec<VenueScoreRecord>,
    pub dismissal_types: Vec<DismissalRecord>,
    pub team_toss_performance: Vec<TeamTossRecord>,
}

impl LoadedData {
    pub fn len_of(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::TopBatsmen => self.top_batsmen.len(),
            DatasetKind::EconomicalBowlers => self.economical_bowlers.len(),
            DatasetKind::TossImpact => self.toss_impact.len(),
            DatasetKind::RunsInWins => self.runs_in_wins.len(),
            DatasetKind::MatchData => self.match_data.len(),
            DatasetKind::ScoresByVenue => self.scores_by_venue.len(),
            DatasetKind::DismissalTypes => self.dismissal_types.len(),
            DatasetKind::TeamTossPerformance => self.team_toss_performance.len(),
        }
    }

    /// Sort the datasets the charts expect pre-ordered. Sorts are stable.
    pub fn sort_for_display(&mut self) {
        self.top_batsmen
            .sort_by(|a, b| b.total_runs.as_f64().total_cmp(&a.total_runs.as_f64()));
        self.economical_bowlers.sort_by(|a, b| {
            a.avg_runs_per_ball
                .as_f64()
                .total_cmp(&b.avg_runs_per_ball.as_f64())
        });
        self.runs_in_wins.sort_by(|a, b| {
            b.avg_runs_in_wins
                .as_f64()
                .total_cmp(&a.avg_runs_in_wins.as_f64())
        });
    }
}

/// Loads every dataset from a [`DataSource`].
pub struct DataLoader {
    source: Arc<dyn DataSource>,
    timeout: Duration,
}

impl DataLoader {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn source(&self) -> &Arc<dyn DataSource> {
        &self.source
    }

    /// Fetch all eight datasets concurrently and apply the failure policy.
    pub async fn load(&self) -> Result<LoadedData, LoadError> {
        info!(source = %self.source.describe(), "loading datasets");

        let (
            top_batsmen,
            economical_bowlers,
            toss_impact,
            runs_in_wins,
            match_data,
            scores_by_venue,
            dismissal_types,
            team_toss_performance,
        ) = tokio::join!(
            self.fetch_records::<BatsmanSeasonRecord>(DatasetKind::TopBatsmen),
            self.fetch_records::<BowlerRecord>(DatasetKind::EconomicalBowlers),
            self.fetch_records::<TossOutcomeRecord>(DatasetKind::TossImpact),
            self.fetch_records::<WinRunsRecord>(DatasetKind::RunsInWins),
            self.fetch_records::<MatchRecord>(DatasetKind::MatchData),
            self.fetch_records::<VenueScoreRecord>(DatasetKind::ScoresByVenue),
            self.fetch_records::<DismissalRecord>(DatasetKind::DismissalTypes),
            self.fetch_records::<TeamTossRecord>(DatasetKind::TeamTossPerformance),
        );

        let mut data = LoadedData {
            top_batsmen: settle(DatasetKind::TopBatsmen, top_batsmen)?,
            economical_bowlers: settle(DatasetKind::EconomicalBowlers, economical_bowlers)?,
            toss_impact: settle(DatasetKind::TossImpact, toss_impact)?,
            runs_in_wins: settle(DatasetKind::RunsInWins, runs_in_wins)?,
            match_data: settle(DatasetKind::MatchData, match_data)?,
            scores_by_venue: settle(DatasetKind::ScoresByVenue, scores_by_venue)?,
            dismissal_types: settle(DatasetKind::DismissalTypes, dismissal_types)?,
            team_toss_performance: settle(
                DatasetKind::TeamTossPerformance,
                team_toss_performance,
            )?,
        };

        data.sort_for_display();

        info!(
            top_batsmen = data.top_batsmen.len(),
            economical_bowlers = data.economical_bowlers.len(),
            toss_impact = data.toss_impact.len(),
            runs_in_wins = data.runs_in_wins.len(),
            match_data = data.match_data.len(),
            scores_by_venue = data.scores_by_venue.len(),
            dismissal_types = data.dismissal_types.len(),
            team_toss_performance = data.team_toss_performance.len(),
            "datasets loaded"
        );

        Ok(data)
    }

    async fn fetch_records<T: DeserializeOwned>(
        &self,
        kind: DatasetKind,
    ) -> Result<Option<Vec<T>>, FetchError> {
        let bytes = tokio::time::timeout(self.timeout, self.source.fetch(kind.file_name()))
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))??;
        decode_records(kind, &bytes)
    }
}

/// Decode a dataset body. `Ok(None)` means valid JSON that is not an array.
pub fn decode_records<T: DeserializeOwned>(
    kind: DatasetKind,
    bytes: &[u8],
) -> Result<Option<Vec<T>>, FetchError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(None);
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .filter(|item| item.is_object())
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if records.len() < total {
        warn!(
            dataset = kind.file_name(),
            skipped = total - records.len(),
            "skipped malformed records"
        );
    }

    Ok(Some(records))
}

/// Apply the critical/optional policy to one fetch outcome.
fn settle<T>(
    kind: DatasetKind,
    outcome: Result<Option<Vec<T>>, FetchError>,
) -> Result<Vec<T>, LoadError> {
    match (outcome, kind.is_critical()) {
        (Ok(Some(records)), _) => Ok(records),
        (Ok(None), true) => Err(LoadError::NotAnArray { dataset: kind }),
        (Ok(None), false) => {
            warn!(dataset = kind.file_name(), "not a JSON array, using empty dataset");
            Ok(Vec::new())
        }
        (Err(source), true) => Err(LoadError::Critical {
            dataset: kind,
            source,
        }),
        (Err(e), false) => {
            warn!(dataset = kind.file_name(), error = %e, "optional dataset unavailable");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::records::Loose;

    #[test]
    fn test_policy_split() {
        let critical: Vec<_> = DatasetKind::ALL
            .iter()
            .filter(|k| k.is_critical())
            .collect();
        assert_eq!(critical.len(), 4);
        assert!(!DatasetKind::MatchData.is_critical());
        assert!(!DatasetKind::DismissalTypes.is_critical());
    }

    #[test]
    fn test_decode_skips_non_objects() {
        let body = br#"[{"out_type": "caught", "frequency": 10}, 5, "x", {"out_type": "bowled"}]"#;
        let records: Vec<DismissalRecord> =
            decode_records(DatasetKind::DismissalTypes, body).unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].frequency, Loose::Missing);
    }

    #[test]
    fn test_decode_non_array() {
        let records: Option<Vec<DismissalRecord>> =
            decode_records(DatasetKind::DismissalTypes, br#"{"a": 1}"#).unwrap();
        assert!(records.is_none());
        let err = decode_records::<DismissalRecord>(DatasetKind::DismissalTypes, b"not json");
        assert!(matches!(err, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_settle_policy() {
        let ok: Result<Vec<u8>, _> = settle(DatasetKind::ScoresByVenue, Ok(None));
        assert!(ok.unwrap().is_empty());

        let err = settle::<u8>(DatasetKind::TossImpact, Ok(None)).unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray { .. }));

        let err = settle::<u8>(DatasetKind::TopBatsmen, Err(FetchError::Status(404))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch topBatsmen.json: HTTP status 404"
        );
    }

    #[test]
    fn test_sort_for_display_is_stable() {
        let mut data = LoadedData {
            top_batsmen: vec![
                BatsmanSeasonRecord::new("A", "50", 2020),
                BatsmanSeasonRecord::new("B", 70, 2020),
                BatsmanSeasonRecord::new("C", 50, 2021),
            ],
            economical_bowlers: vec![
                BowlerRecord::new("X", 1.4, 3),
                BowlerRecord::new("Y", "bad", 1),
                BowlerRecord::new("Z", 1.1, 2),
            ],
            ..Default::default()
        };
        data.sort_for_display();

        let names: Vec<_> = data
            .top_batsmen
            .iter()
            .map(|r| r.player_name.label_or("?"))
            .collect();
        assert_eq!(names, ["B", "A", "C"]);

        let names: Vec<_> = data
            .economical_bowlers
            .iter()
            .map(|r| r.player_name.label_or("?"))
            .collect();
        assert_eq!(names, ["Y", "Z", "X"]);
    }
}
