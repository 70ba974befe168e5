//! View Parameters Module
//! Every user-selectable chart option, passed explicitly into the derivers.

use std::fmt;

/// Row limit for the ranked bar charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopN {
    Ten,
    #[default]
    Fifteen,
    Twenty,
    TwentyFive,
}

impl TopN {
    pub const ALL: [TopN; 4] = [TopN::Ten, TopN::Fifteen, TopN::Twenty, TopN::TwentyFive];

    pub fn count(&self) -> usize {
        match self {
            TopN::Ten => 10,
            TopN::Fifteen => 15,
            TopN::Twenty => 20,
            TopN::TwentyFive => 25,
        }
    }

    pub fn from_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.count() == count)
    }
}

impl fmt::Display for TopN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Top {}", self.count())
    }
}

/// Season selector for the top batsmen chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SeasonFilter {
    /// Aggregate each player's runs across every season.
    #[default]
    All,
    Year(i64),
}

impl fmt::Display for SeasonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonFilter::All => write!(f, "All Seasons"),
            SeasonFilter::Year(year) => write!(f, "{}", year),
        }
    }
}

/// Toss impact chart: per-team stacked bars or overall outcome pie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TossView {
    #[default]
    ByTeam,
    Overall,
}

/// Ranking metric for the venue chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VenueSort {
    #[default]
    Average,
    Highest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DismissalView {
    #[default]
    Bar,
    Pie,
}

/// Ranking metric for team performance after winning the toss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TossMetric {
    #[default]
    Wins,
    Ratio,
}

/// All view parameters of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewParams {
    pub season: SeasonFilter,
    pub batsmen_top_n: TopN,
    pub bowlers_top_n: TopN,
    pub wins_top_n: TopN,
    pub toss_view: TossView,
    pub venue_sort: VenueSort,
    pub dismissal_view: DismissalView,
    pub toss_metric: TossMetric,
}

impl ViewParams {
    /// Defaults with every TopN selector set to `top_n`.
    pub fn with_top_n(top_n: TopN) -> Self {
        Self {
            batsmen_top_n: top_n,
            bowlers_top_n: top_n,
            wins_top_n: top_n,
            ..Self::default()
        }
    }
}
