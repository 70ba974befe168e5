//! Stats module - chart derivers and summary statistics
//!
//! Every deriver is a pure function from a dataset slice and its view
//! parameters to an ordered sequence of chart points. Derivers never fail:
//! malformed cells read as 0 or "Unknown".

mod batting;
mod bowling;
pub mod params;
mod summary;
mod toss;
mod venue;
mod views;

pub use batting::{
    available_seasons, runs_in_wins, season_analysis, top_batsmen, BatsmanPoint, SeasonPoint,
    WinRunsPoint,
};
pub use bowling::{dismissal_types, economical_bowlers, title_case, BowlerPoint, DismissalPoint};
pub use params::{DismissalView, SeasonFilter, TopN, TossMetric, TossView, VenueSort, ViewParams};
pub use summary::SummaryStats;
pub use toss::{
    max_metric, team_toss_performance, toss_countplot, toss_outcome_shares, OutcomeShare,
    TeamTossPoint, TossTeamPoint, TOSS_TEAM_LIMIT,
};
pub use venue::{scores_by_venue, VenuePoint, VENUE_LIMIT};
pub use views::DashboardViews;

use crate::data::records::parse_leading_float;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Percentage share rounded to one decimal, 0 when the total is not positive.
pub fn share_percent(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        round_to(value / total * 100.0, 1)
    } else {
        0.0
    }
}

/// Locale-invariant name ordering: case-insensitive, then byte order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Season label ordering: numeric labels ascending, then the rest by text.
pub fn compare_seasons(a: &str, b: &str) -> Ordering {
    match (parse_leading_float(a), parse_leading_float(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Group items by a string key, keeping groups in first-seen order.
pub(crate) fn group_by_label<'a, T>(
    items: &'a [T],
    key: impl Fn(&T) -> String,
) -> Vec<(String, Vec<&'a T>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&'a T>)> = Vec::new();

    for item in items {
        let label = key(item);
        match index.get(&label) {
            Some(&i) => groups[i].1.push(item),
            None => {
                index.insert(label.clone(), groups.len());
                groups.push((label, vec![item]));
            }
        }
    }

    groups
}
