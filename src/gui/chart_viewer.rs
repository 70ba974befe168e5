//! Chart Viewer Widget
//! Right side scrollable panel with one card per chart. View selectors
//! live on the cards and write straight into the [`ViewParams`].

use crate::charts::{palette, CategoryBar, ChartPlotter, PieSlice};
use crate::stats::{
    max_metric, DashboardViews, DismissalView, SeasonFilter, TopN, TossMetric, TossView,
    VenueSort, ViewParams,
};
use egui::{ComboBox, RichText, ScrollArea};

const CHART_SPACING: f32 = 15.0;

/// Scrollable chart display area.
#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    /// Draw every chart card. Returns true when a selector changed `params`.
    pub fn show(&mut self, ui: &mut egui::Ui, views: &DashboardViews, params: &mut ViewParams) -> bool {
        let before = *params;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::card(ui, "🏆 Top Batsmen", |ui| {
                    Self::top_batsmen(ui, views, params)
                });
                Self::card(ui, "🎯 Most Economical Bowlers (Powerplay)", |ui| {
                    Self::economical_bowlers(ui, views, params)
                });
                Self::card(ui, "🪙 Toss Impact", |ui| Self::toss_impact(ui, views, params));
                Self::card(ui, "🏏 Runs in Winning Matches", |ui| {
                    Self::runs_in_wins(ui, views, params)
                });
                Self::card(ui, "📈 Season-wise Analysis", |ui| Self::season_trend(ui, views));
                Self::card(ui, "🏟 Scores by Venue", |ui| Self::venues(ui, views, params));
                Self::card(ui, "☝ Dismissal Types", |ui| Self::dismissals(ui, views, params));
                Self::card(ui, "🤝 Team Performance After Winning Toss", |ui| {
                    Self::team_toss(ui, views, params)
                });
            });

        *params != before
    }

    fn card(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(title).size(18.0).strong());
                ui.add_space(8.0);
                add_contents(ui);
            });
        ui.add_space(CHART_SPACING);
    }

    fn no_data(ui: &mut egui::Ui, what: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                RichText::new(format!("No data available for {}", what))
                    .size(14.0)
                    .color(egui::Color32::GRAY),
            );
            ui.add_space(40.0);
        });
    }

    fn top_n_selector(ui: &mut egui::Ui, id: &str, value: &mut TopN) {
        ComboBox::from_id_salt(id)
            .selected_text(value.to_string())
            .show_ui(ui, |ui| {
                for option in TopN::ALL {
                    ui.selectable_value(value, option, option.to_string());
                }
            });
    }

    fn top_batsmen(ui: &mut egui::Ui, views: &DashboardViews, params: &mut ViewParams) {
        ui.horizontal(|ui| {
            ui.label("Season:");
            ComboBox::from_id_salt("batsmen_season")
                .selected_text(params.season.to_string())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut params.season, SeasonFilter::All, "All Seasons");
                    for year in &views.seasons {
                        ui.selectable_value(
                            &mut params.season,
                            SeasonFilter::Year(*year),
                            year.to_string(),
                        );
                    }
                });
            ui.label("Show:");
            Self::top_n_selector(ui, "batsmen_top_n", &mut params.batsmen_top_n);
        });
        ui.add_space(6.0);

        if views.top_batsmen.is_empty() {
            return Self::no_data(ui, "top batsmen");
        }

        let bars: Vec<CategoryBar> = views
            .top_batsmen
            .iter()
            .map(|p| CategoryBar {
                label: p.name.clone(),
                value: p.runs,
                color: palette::rank_color(p.rank),
                detail: format!("#{} {}: {} runs ({})", p.rank, p.name, p.runs, p.season),
            })
            .collect();
        ChartPlotter::draw_horizontal_bars(ui, "top_batsmen", &bars, "Runs");
    }

    fn economical_bowlers(ui: &mut egui::Ui, views: &DashboardViews, params: &mut ViewParams) {
        ui.horizontal(|ui| {
            ui.label("Show:");
            Self::top_n_selector(ui, "bowlers_top_n", &mut params.bowlers_top_n);
        });
        ui.add_space(6.0);

        if views.economical_bowlers.is_empty() {
            return Self::no_data(ui, "economical bowlers");
        }

        let bars: Vec<CategoryBar> = views
            .economical_bowlers
            .iter()
            .map(|p| CategoryBar {
                label: p.name.clone(),
                value: p.economy,
                color: palette::BOWLING,
                detail: format!(
                    "{}: {:.2} runs/ball, {} wickets",
                    p.name, p.economy, p.wickets
                ),
            })
            .collect();
        ChartPlotter::draw_horizontal_bars(ui, "economical_bowlers", &bars, "Runs per Ball");
    }

    fn toss_impact(ui: &mut egui::Ui, views: &DashboardViews, params: &mut ViewParams) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut params.toss_view, TossView::ByTeam, "By Team");
            ui.selectable_value(&mut params.toss_view, TossView::Overall, "Overall");
        });
        ui.add_space(6.0);

        match params.toss_view {
            TossView::ByTeam => {
                if views.toss_by_team.is_empty() {
                    return Self::no_data(ui, "toss impact");
                }
                ChartPlotter::draw_toss_stacked(ui, &views.toss_by_team);
            }
            TossView::Overall => {
                if views.toss_outcomes.is_empty() {
                    return Self::no_data(ui, "toss impact");
                }
                let slices: Vec<PieSlice> = views
                    .toss_outcomes
                    .iter()
                    .enumerate()
                    .map(|(i, s)| PieSlice {
                        label: s.name.clone(),
                        value: s.value as f64,
                        color: palette::cycle(&palette::OUTCOME_COLORS, i),
                    })
                    .collect();
                ChartPlotter::draw_pie(ui, &slices);
            }
        }
    }

    fn runs_in_wins(ui: &mut egui::Ui, views: &DashboardViews, params: &mut ViewParams) {
        ui.horizontal(|ui| {
            ui.label("Show:");
            Self::top_n_selector(ui, "wins_top_n", &mut params.wins_top_n);
        });
        ui.add_space(6.0);

        if views.runs_in_wins.is_empty() {
            return Self::no_data(ui, "runs in winning matches");
        }

        let bars: Vec<CategoryBar> = views
            .runs_in_wins
            .iter()
            .map(|p| CategoryBar {
                label: p.name.clone(),
                value: p.avg_runs,
                color: palette::WINS,
                detail: format!(
                    "{}: {:.2} avg runs in {} innings",
                    p.name, p.avg_runs, p.innings
                ),
            })
            .collect();
        ChartPlotter::draw_horizontal_bars(ui, "runs_in_wins", &bars, "Average Runs");
    }

    fn season_trend(ui: &mut egui::Ui, views: &DashboardViews) {
        if views.season_trend.is_empty() {
            return Self::no_data(ui, "season analysis");
        }
        ChartPlotter::draw_season_line(ui, &views.season_trend);
    }

    fn venues(ui: &mut egui::Ui, views: &DashboardViews, params: &mut ViewParams) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut params.venue_sort, VenueSort::Average, "Average Score");
            ui.selectable_value(&mut params.venue_sort, VenueSort::Highest, "Highest Score");
        });
        ui.add_space(6.0);

        if views.venues.is_empty() {
            return Self::no_data(ui, "venue scores");
        }

        let sort = params.venue_sort;
        let max = views
            .venues
            .iter()
            .map(|p| p.metric(sort))
            .fold(0.0, f64::max);
        let bars: Vec<CategoryBar> = views
            .venues
            .iter()
            .map(|p| CategoryBar {
                label: p.venue_name.clone(),
                value: p.metric(sort),
                color: palette::venue_color(p.metric(sort), max),
                detail: format!(
                    "{}\nAverage: {:.1}\nHighest: {:.1}",
                    p.venue_name, p.average_score, p.highest_score
                ),
            })
            .collect();
        let axis = match sort {
            VenueSort::Average => "Average Score",
            VenueSort::Highest => "Highest Score",
        };
        ChartPlotter::draw_horizontal_bars(ui, "venues", &bars, axis);
    }

    fn dismissals(ui: &mut egui::Ui, views: &DashboardViews, params: &mut ViewParams) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut params.dismissal_view, DismissalView::Bar, "Bar");
            ui.selectable_value(&mut params.dismissal_view, DismissalView::Pie, "Pie");
        });
        ui.add_space(6.0);

        if views.dismissals.is_empty() {
            return Self::no_data(ui, "dismissal types");
        }

        match params.dismissal_view {
            DismissalView::Bar => {
                let mut bars: Vec<CategoryBar> = views
                    .dismissals
                    .iter()
                    .enumerate()
                    .map(|(i, p)| CategoryBar {
                        label: p.formatted_type.clone(),
                        value: p.frequency,
                        color: palette::cycle(&palette::DISMISSAL_COLORS, i),
                        detail: format!(
                            "{}: {} ({:.1}%)",
                            p.formatted_type,
                            p.frequency,
                            p.percentage(&views.dismissals)
                        ),
                    })
                    .collect();
                bars.reverse();
                ChartPlotter::draw_horizontal_bars(ui, "dismissals", &bars, "Frequency");
            }
            DismissalView::Pie => {
                let slices: Vec<PieSlice> = views
                    .dismissals
                    .iter()
                    .enumerate()
                    .map(|(i, p)| PieSlice {
                        label: p.formatted_type.clone(),
                        value: p.frequency,
                        color: palette::cycle(&palette::DISMISSAL_COLORS, i),
                    })
                    .collect();
                ChartPlotter::draw_pie(ui, &slices);
            }
        }
    }

    fn team_toss(ui: &mut egui::Ui, views: &DashboardViews, params: &mut ViewParams) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut params.toss_metric, TossMetric::Wins, "Wins");
            ui.selectable_value(&mut params.toss_metric, TossMetric::Ratio, "Win Ratio");
        });
        ui.add_space(6.0);

        if views.team_toss.is_empty() {
            return Self::no_data(ui, "team toss performance");
        }

        let metric = params.toss_metric;
        let max = max_metric(&views.team_toss, metric);
        let bars: Vec<CategoryBar> = views
            .team_toss
            .iter()
            .map(|p| CategoryBar {
                label: p.team.clone(),
                value: p.metric(metric),
                color: palette::team_toss_color(p.metric(metric), max),
                detail: format!(
                    "{}\nWins after toss: {}\nMatches: {}\nWin Ratio: {}%",
                    p.team, p.wins_after_toss, p.matches_played, p.win_ratio
                ),
            })
            .collect();
        let axis = match metric {
            TossMetric::Wins => "Wins After Toss",
            TossMetric::Ratio => "Win Ratio (%)",
        };
        ChartPlotter::draw_horizontal_bars(ui, "team_toss", &bars, axis);
    }
}
