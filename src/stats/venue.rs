//! Venue Deriver

use super::VenueSort;
use crate::data::VenueScoreRecord;
use serde::Serialize;

/// Number of venues shown.
pub const VENUE_LIMIT: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenuePoint {
    pub venue_name: String,
    pub average_score: f64,
    pub highest_score: f64,
}

impl VenuePoint {
    pub fn metric(&self, sort: VenueSort) -> f64 {
        match sort {
            VenueSort::Average => self.average_score,
            VenueSort::Highest => self.highest_score,
        }
    }
}

/// Top venues by the chosen metric, best venue last.
pub fn scores_by_venue(records: &[VenueScoreRecord], sort: VenueSort) -> Vec<VenuePoint> {
    let mut points: Vec<VenuePoint> = records
        .iter()
        .map(|r| VenuePoint {
            venue_name: r.venue_name.label_or("Unknown"),
            average_score: r.average_score.as_f64(),
            highest_score: r.highest_score.as_f64(),
        })
        .collect();

    points.sort_by(|a, b| b.metric(sort).total_cmp(&a.metric(sort)));
    points.truncate(VENUE_LIMIT);
    points.reverse();
    points
}
