//! Summary Statistics Module
//! Headline numbers shown on the dashboard stat cards.

use crate::data::LoadedData;
use serde::Serialize;
use statrs::statistics::Statistics;

/// Headline numbers derived once per successful load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_players: usize,
    pub top_scorer: String,
    pub top_score: f64,
    pub total_matches: usize,
    pub avg_runs: f64,
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self {
            total_players: 0,
            top_scorer: "N/A".to_string(),
            top_score: 0.0,
            total_matches: 0,
            avg_runs: 0.0,
        }
    }
}

impl SummaryStats {
    /// Compute from loader output. Expects batsmen sorted by runs descending.
    pub fn from_data(data: &LoadedData) -> Self {
        let total_matches = data.match_data.len();

        let Some(top) = data.top_batsmen.first() else {
            return Self {
                total_matches,
                ..Self::default()
            };
        };

        let avg_runs = data
            .top_batsmen
            .iter()
            .map(|r| r.total_runs.as_f64())
            .mean();

        Self {
            total_players: data.top_batsmen.len(),
            top_scorer: top.player_name.label_or("N/A"),
            top_score: top.total_runs.as_f64(),
            total_matches,
            avg_runs,
        }
    }
}
