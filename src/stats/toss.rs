//! Toss Derivers
//! Toss impact per team, overall match outcomes, and team performance
//! after winning the toss.

use super::{compare_names, group_by_label, round_to, share_percent, TossMetric};
use crate::data::{TeamTossRecord, TossOutcomeRecord};
use serde::Serialize;
use std::cmp::Ordering;

/// Number of teams shown in the toss countplot.
pub const TOSS_TEAM_LIMIT: usize = 15;

/// Stacked bar for one toss winner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TossTeamPoint {
    pub name: String,
    #[serde(rename = "Won")]
    pub won: usize,
    #[serde(rename = "Lost")]
    pub lost: usize,
}

impl TossTeamPoint {
    pub fn total(&self) -> usize {
        self.won + self.lost
    }
}

/// Pie slice for one match outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeShare {
    pub name: String,
    pub value: usize,
}

impl OutcomeShare {
    pub fn percentage(&self, shares: &[OutcomeShare]) -> f64 {
        let total: usize = shares.iter().map(|s| s.value).sum();
        share_percent(self.value as f64, total as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamTossPoint {
    pub team: String,
    pub wins_after_toss: f64,
    pub matches_played: f64,
    /// Percentage, one decimal.
    pub win_ratio: f64,
}

impl TeamTossPoint {
    pub fn metric(&self, metric: TossMetric) -> f64 {
        match metric {
            TossMetric::Wins => self.wins_after_toss,
            TossMetric::Ratio => self.win_ratio,
        }
    }
}

/// Won/lost counts per toss winner, busiest teams first.
///
/// Only the exact outcome `"Won"` counts as a win.
pub fn toss_countplot(records: &[TossOutcomeRecord]) -> Vec<TossTeamPoint> {
    let mut points: Vec<TossTeamPoint> =
        group_by_label(records, |r| r.toss_winner.label_or("Unknown"))
            .into_iter()
            .map(|(name, rows)| {
                let won = rows.iter().filter(|r| r.match_outcome.is_text("Won")).count();
                TossTeamPoint {
                    name,
                    won,
                    lost: rows.len() - won,
                }
            })
            .collect();

    points.sort_by(|a, b| b.total().cmp(&a.total()));
    points.truncate(TOSS_TEAM_LIMIT);
    points
}

/// Match count per outcome value, in first-seen order.
pub fn toss_outcome_shares(records: &[TossOutcomeRecord]) -> Vec<OutcomeShare> {
    group_by_label(records, |r| r.match_outcome.label_or("Unknown"))
        .into_iter()
        .map(|(name, rows)| OutcomeShare {
            name,
            value: rows.len(),
        })
        .collect()
}

/// All teams with at least one match, best performer last.
///
/// Ordered by the chosen metric, then the other metric, then team name.
pub fn team_toss_performance(records: &[TeamTossRecord], metric: TossMetric) -> Vec<TeamTossPoint> {
    let mut points: Vec<TeamTossPoint> = records
        .iter()
        .map(|r| {
            let wins = r.wins_after_toss.as_f64();
            let matches = r.matches_played.as_f64();
            TeamTossPoint {
                team: r.team1.label_or("Unknown"),
                wins_after_toss: wins,
                matches_played: matches,
                win_ratio: if matches > 0.0 {
                    round_to(wins / matches * 100.0, 1)
                } else {
                    0.0
                },
            }
        })
        .filter(|p| p.matches_played > 0.0)
        .collect();

    let other = match metric {
        TossMetric::Wins => TossMetric::Ratio,
        TossMetric::Ratio => TossMetric::Wins,
    };

    points.sort_by(|a, b| {
        b.metric(metric)
            .total_cmp(&a.metric(metric))
            .then_with(|| b.metric(other).total_cmp(&a.metric(other)))
            .then_with(|| compare_names(&a.team, &b.team))
    });

    points.reverse();
    points
}

/// Highest value of `metric` across `points`, 0 when empty.
pub fn max_metric(points: &[TeamTossPoint], metric: TossMetric) -> f64 {
    points
        .iter()
        .map(|p| p.metric(metric))
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toss_countplot_groups_and_sorts() {
        let records = vec![
            TossOutcomeRecord::new("CSK", "Won"),
            TossOutcomeRecord::new("MI", "Won"),
            TossOutcomeRecord::new("MI", "Lost"),
            TossOutcomeRecord::new("MI", "won"),
            TossOutcomeRecord::new("CSK", "No Result"),
            TossOutcomeRecord::new(None::<&str>, "Won"),
        ];
        let points = toss_countplot(&records);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].name, "MI");
        assert_eq!((points[0].won, points[0].lost), (1, 2));
        assert_eq!(points[1].name, "CSK");
        assert_eq!((points[1].won, points[1].lost), (1, 1));
        assert_eq!(points[2].name, "Unknown");
    }

    #[test]
    fn test_toss_countplot_limit() {
        let records: Vec<_> = (0..20i32)
            .map(|i| TossOutcomeRecord::new(format!("T{}", i), "Won"))
            .collect();
        let points = toss_countplot(&records);
        assert_eq!(points.len(), TOSS_TEAM_LIMIT);
        assert_eq!(points[0].name, "T0");
    }

    #[test]
    fn test_outcome_shares() {
        let records = vec![
            TossOutcomeRecord::new("A", "Lost"),
            TossOutcomeRecord::new("B", "Won"),
            TossOutcomeRecord::new("C", "Won"),
            TossOutcomeRecord::new("D", None::<&str>),
        ];
        let shares = toss_outcome_shares(&records);
        let pairs: Vec<_> = shares.iter().map(|s| (s.name.as_str(), s.value)).collect();
        assert_eq!(pairs, [("Lost", 1), ("Won", 2), ("Unknown", 1)]);
        assert_eq!(shares[1].percentage(&shares), 50.0);
    }

    #[test]
    fn test_team_toss_excludes_zero_matches() {
        let records = vec![
            TeamTossRecord::new("A", 5, 0),
            TeamTossRecord::new("B", 5, 10),
            TeamTossRecord::new("C", 2, "bad"),
        ];
        let points = team_toss_performance(&records, TossMetric::Wins);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].win_ratio, 50.0);
    }

    #[test]
    fn test_team_toss_ratio_rounding() {
        let records = vec![TeamTossRecord::new("A", 2, 3)];
        let points = team_toss_performance(&records, TossMetric::Ratio);
        assert_eq!(points[0].win_ratio, 66.7);
    }

    #[test]
    fn test_team_toss_tie_breaks() {
        let records = vec![
            TeamTossRecord::new("delhi", 10, 20),
            TeamTossRecord::new("Chennai", 10, 20),
            TeamTossRecord::new("Mumbai", 10, 15),
            TeamTossRecord::new("Punjab", 12, 40),
        ];

        let by_wins: Vec<_> = team_toss_performance(&records, TossMetric::Wins)
            .into_iter()
            .rev()
            .map(|p| p.team)
            .collect();
        assert_eq!(by_wins, ["Punjab", "Mumbai", "Chennai", "delhi"]);

        let by_ratio: Vec<_> = team_toss_performance(&records, TossMetric::Ratio)
            .into_iter()
            .rev()
            .map(|p| p.team)
            .collect();
        assert_eq!(by_ratio, ["Mumbai", "Chennai", "delhi", "Punjab"]);
    }

    #[test]
    fn test_max_metric() {
        assert_eq!(max_metric(&[], TossMetric::Wins), 0.0);
        let points = team_toss_performance(
            &[TeamTossRecord::new("A", 3, 4), TeamTossRecord::new("B", 7, 20)],
            TossMetric::Wins,
        );
        assert_eq!(max_metric(&points, TossMetric::Wins), 7.0);
        assert_eq!(max_metric(&points, TossMetric::Ratio), 75.0);
    }
}
