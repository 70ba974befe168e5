//! Batting Derivers
//! Top batsmen, runs in winning matches, and the season-wise trend.

use super::{compare_seasons, group_by_label, round_to, SeasonFilter, TopN};
use crate::data::{BatsmanSeasonRecord, WinRunsRecord};
use serde::Serialize;
use statrs::statistics::Statistics;

/// One bar of the top batsmen chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatsmanPoint {
    pub name: String,
    pub runs: f64,
    /// Season label, or the comma-joined seasons when aggregated.
    pub season: String,
    /// 1 for the highest scorer.
    pub rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinRunsPoint {
    pub name: String,
    #[serde(rename = "avgRuns")]
    pub avg_runs: f64,
    pub innings: f64,
}

/// One point of the season-wise line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonPoint {
    pub season: String,
    #[serde(rename = "avgRuns")]
    pub avg_runs: f64,
    #[serde(rename = "totalRuns")]
    pub total_runs: f64,
    pub players: usize,
}

/// Ranked batsmen, lowest rank first so the top scorer draws at the top.
pub fn top_batsmen(
    records: &[BatsmanSeasonRecord],
    season: SeasonFilter,
    top_n: TopN,
) -> Vec<BatsmanPoint> {
    let mut rows: Vec<(String, f64, String)> = match season {
        SeasonFilter::All => aggregate_by_player(records),
        SeasonFilter::Year(year) => records
            .iter()
            .filter(|r| r.season_year.parse_f64() == Some(year as f64))
            .map(|r| {
                (
                    r.player_name.label_or("Unknown"),
                    r.total_runs.as_f64(),
                    r.season_year.label_or("N/A"),
                )
            })
            .collect(),
    };

    rows.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut points: Vec<BatsmanPoint> = rows
        .into_iter()
        .take(top_n.count())
        .enumerate()
        .map(|(i, (name, runs, season))| BatsmanPoint {
            name,
            runs,
            season,
            rank: i + 1,
        })
        .collect();

    points.reverse();
    points
}

/// Sum runs per player across seasons, in first-seen player order.
fn aggregate_by_player(records: &[BatsmanSeasonRecord]) -> Vec<(String, f64, String)> {
    group_by_label(records, |r| r.player_name.label_or("Unknown"))
        .into_iter()
        .map(|(name, rows)| {
            let runs: f64 = rows.iter().map(|r| r.total_runs.as_f64()).sum();

            let mut seasons: Vec<String> = Vec::new();
            for label in rows.iter().filter_map(|r| r.season_year.label()) {
                if !seasons.contains(&label) {
                    seasons.push(label);
                }
            }
            let season = if seasons.is_empty() {
                "N/A".to_string()
            } else {
                seasons.join(", ")
            };

            (name, runs, season)
        })
        .collect()
}

/// Integral season years present in the data, ascending. Feeds the season selector.
pub fn available_seasons(records: &[BatsmanSeasonRecord]) -> Vec<i64> {
    let mut seasons: Vec<i64> = records
        .iter()
        .filter_map(|r| r.season_year.parse_f64())
        .filter(|y| *y != 0.0 && y.fract() == 0.0)
        .map(|y| y as i64)
        .collect();
    seasons.sort_unstable();
    seasons.dedup();
    seasons
}

/// Best average runs in winning matches. Rows without a positive average are dropped.
pub fn runs_in_wins(records: &[WinRunsRecord], top_n: TopN) -> Vec<WinRunsPoint> {
    let mut rows: Vec<&WinRunsRecord> = records
        .iter()
        .filter(|r| r.avg_runs_in_wins.parse_f64().is_some_and(|v| v > 0.0))
        .collect();

    rows.sort_by(|a, b| {
        b.avg_runs_in_wins
            .as_f64()
            .total_cmp(&a.avg_runs_in_wins.as_f64())
    });

    let mut points: Vec<WinRunsPoint> = rows
        .into_iter()
        .take(top_n.count())
        .map(|r| WinRunsPoint {
            name: r.player_name.label_or("Unknown"),
            avg_runs: r.avg_runs_in_wins.as_f64(),
            innings: r.innings_played.as_f64(),
        })
        .collect();

    points.reverse();
    points
}

/// Per-season average, total and player count, in season order.
pub fn season_analysis(records: &[BatsmanSeasonRecord]) -> Vec<SeasonPoint> {
    let groups = group_by_label(records, |r| r.season_year.label_or("Unknown"));
    let mut points: Vec<SeasonPoint> = groups
        .into_iter()
        .map(|(season, rows)| {
            let runs: Vec<f64> = rows.iter().map(|r| r.total_runs.as_f64()).collect();
            SeasonPoint {
                season,
                avg_runs: round_to(runs.iter().mean(), 2),
                total_runs: runs.iter().sum(),
                players: runs.len(),
            }
        })
        .collect();

    points.sort_by(|a, b| compare_seasons(&a.season, &b.season));
    points
}
