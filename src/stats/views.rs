//! Derived Views Module
//! Every chart series the dashboard draws, recomputed on load and on
//! any view parameter change.

use super::*;
use crate::data::LoadedData;

/// Chart series for one (data, params) pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardViews {
    pub seasons: Vec<i64>,
    pub top_batsmen: Vec<BatsmanPoint>,
    pub economical_bowlers: Vec<BowlerPoint>,
    pub toss_by_team: Vec<TossTeamPoint>,
    pub toss_outcomes: Vec<OutcomeShare>,
    pub runs_in_wins: Vec<WinRunsPoint>,
    pub season_trend: Vec<SeasonPoint>,
    pub venues: Vec<VenuePoint>,
    pub dismissals: Vec<DismissalPoint>,
    pub team_toss: Vec<TeamTossPoint>,
}

impl DashboardViews {
    /// Run every deriver, one rayon task each.
    pub fn derive(data: &LoadedData, params: &ViewParams) -> Self {
        let mut views = Self::default();
        let Self {
            seasons,
            top_batsmen: batsmen,
            economical_bowlers: bowlers,
            toss_by_team,
            toss_outcomes,
            runs_in_wins: wins,
            season_trend,
            venues,
            dismissals,
            team_toss,
        } = &mut views;

        rayon::scope(|s| {
            s.spawn(move |_| *seasons = available_seasons(&data.top_batsmen));
            s.spawn(move |_| {
                *batsmen = top_batsmen(&data.top_batsmen, params.season, params.batsmen_top_n)
            });
            s.spawn(move |_| {
                *bowlers = economical_bowlers(&data.economical_bowlers, params.bowlers_top_n)
            });
            s.spawn(move |_| *toss_by_team = toss_countplot(&data.toss_impact));
            s.spawn(move |_| *toss_outcomes = toss_outcome_shares(&data.toss_impact));
            s.spawn(move |_| *wins = runs_in_wins(&data.runs_in_wins, params.wins_top_n));
            s.spawn(move |_| *season_trend = season_analysis(&data.top_batsmen));
            s.spawn(move |_| *venues = scores_by_venue(&data.scores_by_venue, params.venue_sort));
            s.spawn(move |_| *dismissals = dismissal_types(&data.dismissal_types));
            s.spawn(move |_| {
                *team_toss = team_toss_performance(&data.team_toss_performance, params.toss_metric)
            });
        });

        views
    }
}
