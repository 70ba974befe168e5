use ipl_insights::data::{
    BatsmanSeasonRecord, BowlerRecord, DismissalRecord, LoadedData, TeamTossRecord,
    TossOutcomeRecord, VenueScoreRecord, WinRunsRecord,
};
use ipl_insights::stats::{
    dismissal_types, economical_bowlers, round_to, runs_in_wins, scores_by_venue,
    season_analysis, team_toss_performance, toss_countplot, top_batsmen, DashboardViews,
    SeasonFilter, TopN, TossMetric, VenueSort, ViewParams, TOSS_TEAM_LIMIT, VENUE_LIMIT,
};

fn batsmen() -> Vec<BatsmanSeasonRecord> {
    (0..40i32)
        .map(|i| {
            let runs: f64 = if i % 7 == 0 { 0.0 } else { (i * 37 % 500) as f64 };
            BatsmanSeasonRecord::new(format!("Player {}", i % 23), runs, 2008 + i % 5)
        })
        .chain([
            BatsmanSeasonRecord::new("Odd", "not a number", 2010),
            BatsmanSeasonRecord::new(None::<&str>, 12, None::<i32>),
        ])
        .collect()
}

fn bowlers() -> Vec<BowlerRecord> {
    let mut data = LoadedData {
        economical_bowlers: (0..30i32)
            .map(|i| BowlerRecord::new(format!("B{}", i), 1.0 + (i * 13 % 30) as f64 / 20.0, i))
            .collect(),
        ..LoadedData::default()
    };
    data.sort_for_display();
    data.economical_bowlers
}

fn win_runs() -> Vec<WinRunsRecord> {
    (0..30i32)
        .map(|i| WinRunsRecord::new(format!("W{}", i), (i % 9 - 2) as f64 * 7.5, i))
        .collect()
}

#[test]
fn test_top_n_lengths() {
    let batsmen = batsmen();
    let bowlers = bowlers();
    let wins = win_runs();
    let positive_wins = wins
        .iter()
        .filter(|r| r.avg_runs_in_wins.as_f64() > 0.0)
        .count();

    for top_n in TopN::ALL {
        let n = top_n.count();
        assert_eq!(top_batsmen(&batsmen, SeasonFilter::All, top_n).len(), n.min(25));
        assert_eq!(economical_bowlers(&bowlers, top_n).len(), n.min(bowlers.len()));
        assert_eq!(runs_in_wins(&wins, top_n).len(), n.min(positive_wins));
    }
}

#[test]
fn test_all_seasons_aggregation_preserves_total_runs() {
    let records = batsmen();
    let input: f64 = records.iter().map(|r| r.total_runs.as_f64()).sum();
    let output: f64 = top_batsmen(&records, SeasonFilter::All, TopN::TwentyFive)
        .iter()
        .map(|p| p.runs)
        .sum();
    assert_eq!(input, output);
}

#[test]
fn test_ranks_follow_display_order() {
    let points = top_batsmen(&batsmen(), SeasonFilter::Year(2009), TopN::Ten);
    let ranks: Vec<usize> = points.iter().rev().map(|p| p.rank).collect();
    assert_eq!(ranks, (1..=points.len()).collect::<Vec<_>>());
    assert!(points.windows(2).all(|w| w[0].runs <= w[1].runs));
}

#[test]
fn test_bowlers_ascend_after_unreversing() {
    for top_n in TopN::ALL {
        let mut points = economical_bowlers(&bowlers(), top_n);
        points.reverse();
        assert!(points.windows(2).all(|w| w[0].economy <= w[1].economy));
    }
}

#[test]
fn test_runs_in_wins_all_positive() {
    for top_n in TopN::ALL {
        assert!(runs_in_wins(&win_runs(), top_n)
            .iter()
            .all(|p| p.avg_runs > 0.0));
    }
}

#[test]
fn test_team_toss_ratio_matches_recomputation() {
    let records: Vec<TeamTossRecord> = (0..12i32)
        .map(|i| TeamTossRecord::new(format!("Team {}", i), i * 3 % 11, i % 6))
        .collect();

    for metric in [TossMetric::Wins, TossMetric::Ratio] {
        let points = team_toss_performance(&records, metric);
        assert_eq!(points.len(), 10);
        for p in &points {
            assert!(p.matches_played != 0.0);
            assert_eq!(
                p.win_ratio,
                round_to(p.wins_after_toss / p.matches_played * 100.0, 1)
            );
        }
    }
}

#[test]
fn test_season_2020_average() {
    let records = vec![
        BatsmanSeasonRecord::new("A", 10, "2020"),
        BatsmanSeasonRecord::new("B", 20, 2020),
        BatsmanSeasonRecord::new("C", 30, 2020),
    ];
    let points = season_analysis(&records);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].season, "2020");
    assert_eq!(points[0].avg_runs, 20.00);
}

#[test]
fn test_dismissal_title_case() {
    let points = dismissal_types(&[DismissalRecord::new("caught out", 10)]);
    assert_eq!(points[0].formatted_type, "Caught Out");
}

#[test]
fn test_fixed_limits() {
    let toss: Vec<TossOutcomeRecord> = (0..40i32)
        .map(|i| TossOutcomeRecord::new(format!("T{}", i % 20), "Won"))
        .collect();
    assert_eq!(toss_countplot(&toss).len(), TOSS_TEAM_LIMIT);

    let venues: Vec<VenueScoreRecord> = (0..30i32)
        .map(|i| VenueScoreRecord::new(format!("V{}", i), i, 200 - i))
        .collect();
    assert_eq!(scores_by_venue(&venues, VenueSort::Highest).len(), VENUE_LIMIT);
}

#[test]
fn test_derive_is_deterministic() {
    let mut data = LoadedData {
        top_batsmen: batsmen(),
        economical_bowlers: bowlers(),
        runs_in_wins: win_runs(),
        ..LoadedData::default()
    };
    data.sort_for_display();

    let params = ViewParams::with_top_n(TopN::Twenty);
    let first = DashboardViews::derive(&data, &params);
    for _ in 0..5 {
        assert_eq!(DashboardViews::derive(&data, &params), first);
    }
}
