use async_trait::async_trait;
use ipl_insights::data::{
    DashboardState, DataLoader, DataSource, DatasetKind, DirSource, FetchError, LoadError,
};
use ipl_insights::stats::{DashboardViews, ViewParams};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

enum Reply {
    Body(Vec<u8>),
    Status(u16),
    Hang,
}

/// In-memory source keyed by file name. Unknown files answer 404.
#[derive(Default)]
struct MemorySource {
    files: HashMap<String, Reply>,
}

impl MemorySource {
    fn with_json(mut self, kind: DatasetKind, value: serde_json::Value) -> Self {
        self.files
            .insert(kind.file_name().to_string(), Reply::Body(value.to_string().into_bytes()));
        self
    }

    fn with_reply(mut self, kind: DatasetKind, reply: Reply) -> Self {
        self.files.insert(kind.file_name().to_string(), reply);
        self
    }

    fn full() -> Self {
        Self::default()
            .with_json(
                DatasetKind::TopBatsmen,
                json!([
                    {"player_name": "A", "total_runs": "50", "season_year": 2019},
                    {"player_name": "B", "total_runs": 70, "season_year": 2019}
                ]),
            )
            .with_json(
                DatasetKind::EconomicalBowlers,
                json!([
                    {"player_name": "Slow", "avg_runs_per_ball": 1.4, "total_wickets": 3},
                    {"player_name": "Tight", "avg_runs_per_ball": "1.05", "total_wickets": 9}
                ]),
            )
            .with_json(
                DatasetKind::TossImpact,
                json!([
                    {"toss_winner": "CSK", "match_outcome": "Won"},
                    {"toss_winner": "MI", "match_outcome": "Lost"}
                ]),
            )
            .with_json(
                DatasetKind::RunsInWins,
                json!([
                    {"player_name": "A", "avg_runs_in_wins": 22.5, "innings_played": 8},
                    {"player_name": "B", "avg_runs_in_wins": 40, "innings_played": 5}
                ]),
            )
            .with_json(
                DatasetKind::MatchData,
                json!([{"id": 1}, {"id": 2}, {"id": 3}]),
            )
            .with_json(
                DatasetKind::ScoresByVenue,
                json!([{"venue_name": "Eden", "average_score": 160, "highest_score": 222}]),
            )
            .with_json(
                DatasetKind::DismissalTypes,
                json!([{"out_type": "caught", "frequency": 900}]),
            )
            .with_json(
                DatasetKind::TeamTossPerformance,
                json!([{"team1": "KKR", "wins_after_toss": 4, "matches_played": 8}]),
            )
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, FetchError> {
        match self.files.get(file_name) {
            Some(Reply::Body(bytes)) => Ok(bytes.clone()),
            Some(Reply::Status(code)) => Err(FetchError::Status(*code)),
            Some(Reply::Hang) => {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(b"[]".to_vec())
            }
            None => Err(FetchError::Status(404)),
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

fn loader(source: MemorySource) -> DataLoader {
    DataLoader::new(Arc::new(source))
}

#[tokio::test]
async fn test_full_load_sorts_and_summarises() {
    let data = loader(MemorySource::full()).load().await.unwrap();

    assert_eq!(data.top_batsmen[0].player_name.label_or(""), "B");
    assert_eq!(data.economical_bowlers[0].player_name.label_or(""), "Tight");
    assert_eq!(data.runs_in_wins[0].player_name.label_or(""), "B");
    assert_eq!(data.match_data.len(), 3);

    let mut state = DashboardState::new();
    let generation = state.begin_load();
    assert!(state.apply(generation, Ok(data)));

    let stats = state.stats();
    assert_eq!(stats.top_scorer, "B");
    assert_eq!(stats.top_score, 70.0);
    assert_eq!(stats.total_players, 2);
    assert_eq!(stats.avg_runs, 60.0);
    assert_eq!(stats.total_matches, 3);
}

#[tokio::test]
async fn test_critical_failure_fails_whole_load() {
    let source =
        MemorySource::full().with_reply(DatasetKind::EconomicalBowlers, Reply::Status(500));
    let err = loader(source).load().await.unwrap_err();

    match &err {
        LoadError::Critical { dataset, .. } => {
            assert_eq!(*dataset, DatasetKind::EconomicalBowlers)
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("economicalBowlers.json"));

    let mut state = DashboardState::new();
    let generation = state.begin_load();
    state.apply(generation, Err(err));
    for kind in DatasetKind::ALL {
        assert_eq!(state.bundle().data.len_of(kind), 0);
    }
    assert!(state.bundle().error.is_some());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_optional_failure_keeps_other_datasets() {
    let source = MemorySource::full().with_reply(DatasetKind::DismissalTypes, Reply::Status(404));
    let data = loader(source).load().await.unwrap();

    assert!(data.dismissal_types.is_empty());
    for kind in DatasetKind::ALL {
        if kind != DatasetKind::DismissalTypes {
            assert!(data.len_of(kind) > 0, "{} should be loaded", kind.file_name());
        }
    }

    let views = DashboardViews::derive(&data, &ViewParams::default());
    assert!(views.dismissals.is_empty());
    assert_eq!(views.team_toss.len(), 1);
}

#[tokio::test]
async fn test_critical_non_array_is_an_error() {
    let source = MemorySource::full().with_json(DatasetKind::TossImpact, json!({"rows": []}));
    let err = loader(source).load().await.unwrap_err();
    assert!(matches!(
        err,
        LoadError::NotAnArray {
            dataset: DatasetKind::TossImpact
        }
    ));
}

#[tokio::test]
async fn test_optional_non_array_is_empty() {
    let source = MemorySource::full().with_json(DatasetKind::ScoresByVenue, json!(null));
    let data = loader(source).load().await.unwrap();
    assert!(data.scores_by_venue.is_empty());
}

#[tokio::test]
async fn test_timeout_on_critical_dataset() {
    let source = MemorySource::full().with_reply(DatasetKind::RunsInWins, Reply::Hang);
    let err = loader(source)
        .with_timeout(Duration::from_millis(50))
        .load()
        .await
        .unwrap_err();

    match err {
        LoadError::Critical {
            dataset: DatasetKind::RunsInWins,
            source: FetchError::Timeout(after),
        } => assert_eq!(after, Duration::from_millis(50)),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_timeout_on_optional_dataset_is_soft() {
    let source = MemorySource::full().with_reply(DatasetKind::MatchData, Reply::Hang);
    let data = loader(source)
        .with_timeout(Duration::from_millis(50))
        .load()
        .await
        .unwrap();
    assert!(data.match_data.is_empty());
    assert_eq!(data.top_batsmen.len(), 2);
}

#[tokio::test]
async fn test_directory_source_load() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = MemorySource::full();
    for kind in DatasetKind::ALL {
        if let Some(Reply::Body(bytes)) = source.files.get(kind.file_name()) {
            std::fs::write(dir.path().join(kind.file_name()), bytes).unwrap();
        }
    }
    std::fs::remove_file(dir.path().join("teamTossPerformance.json")).unwrap();

    let data = DataLoader::new(Arc::new(DirSource::new(dir.path())))
        .load()
        .await
        .unwrap();
    assert_eq!(data.top_batsmen.len(), 2);
    assert!(data.team_toss_performance.is_empty());
}

#[tokio::test]
async fn test_directory_missing_critical_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = DataLoader::new(Arc::new(DirSource::new(dir.path())))
        .load()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LoadError::Critical {
            source: FetchError::NotFound(_),
            ..
        }
    ));
}
