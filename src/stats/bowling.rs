//! Bowling Derivers
//! Powerplay economy ranking and dismissal type frequencies.

use super::{share_percent, TopN};
use crate::data::{BowlerRecord, DismissalRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlerPoint {
    pub name: String,
    pub economy: f64,
    pub wickets: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DismissalPoint {
    pub out_type: String,
    pub frequency: f64,
    #[serde(rename = "formattedType")]
    pub formatted_type: String,
}

/// Most economical bowlers. Input must already be sorted by economy ascending.
pub fn economical_bowlers(records: &[BowlerRecord], top_n: TopN) -> Vec<BowlerPoint> {
    let mut points: Vec<BowlerPoint> = records
        .iter()
        .take(top_n.count())
        .map(|r| BowlerPoint {
            name: r.player_name.label_or("Unknown"),
            economy: r.avg_runs_per_ball.as_f64(),
            wickets: r.total_wickets.as_f64(),
        })
        .collect();

    points.reverse();
    points
}

/// Dismissal types by frequency, most common first.
pub fn dismissal_types(records: &[DismissalRecord]) -> Vec<DismissalPoint> {
    let mut points: Vec<DismissalPoint> = records
        .iter()
        .map(|r| {
            let out_type = r.out_type.label_or("Unknown");
            DismissalPoint {
                formatted_type: title_case(&out_type),
                out_type,
                frequency: r.frequency.as_f64(),
            }
        })
        .collect();

    points.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
    points
}

impl DismissalPoint {
    /// Share of all dismissals in `points`, for the pie view.
    pub fn percentage(&self, points: &[DismissalPoint]) -> f64 {
        let total: f64 = points.iter().map(|p| p.frequency).sum();
        share_percent(self.frequency, total)
    }
}

/// Capitalize the first letter of each space-separated word, lowercase the rest.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&chars.as_str().to_lowercase());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
