//! Chart Plotter Module
//! Draws the dashboard charts using egui_plot, plus a painter-based pie.

use super::palette;
use crate::stats::{SeasonPoint, TossTeamPoint};
use egui::{Align2, Color32, FontId, RichText, Sense, Shape, Stroke};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};
use std::f64::consts::TAU;

pub const CHART_HEIGHT: f32 = 320.0;

/// One bar of a categorical chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub label: String,
    pub value: f64,
    pub color: Color32,
    /// Hover text.
    pub detail: String,
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

/// Creates the dashboard charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Category name for an axis mark, empty between categories.
    pub fn axis_label(labels: &[String], value: f64) -> String {
        let rounded = value.round();
        if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        labels.get(rounded as usize).cloned().unwrap_or_default()
    }

    /// Start and end angle (radians) of each slice; empty when the total is not positive.
    pub fn pie_angles(values: &[f64]) -> Vec<(f64, f64)> {
        let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut start = -TAU / 4.0;
        values
            .iter()
            .map(|v| {
                let sweep = v.max(0.0) / total * TAU;
                let span = (start, start + sweep);
                start += sweep;
                span
            })
            .collect()
    }

    /// Horizontal bars, first element drawn at the bottom.
    pub fn draw_horizontal_bars(ui: &mut egui::Ui, id: &str, bars: &[CategoryBar], axis: &str) {
        let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();
        let height = CHART_HEIGHT.max(bars.len() as f32 * 22.0);

        let elems: Vec<Bar> = bars
            .iter()
            .enumerate()
            .map(|(i, b)| {
                Bar::new(i as f64, b.value)
                    .name(&b.detail)
                    .fill(b.color)
                    .width(0.7)
            })
            .collect();

        Plot::new(id)
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_label(axis)
            .y_axis_min_width(140.0)
            .y_axis_formatter(move |mark, _range| Self::axis_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(elems)
                        .horizontal()
                        .element_formatter(Box::new(|bar, _chart| bar.name.clone())),
                );
            });
    }

    /// Won/Lost stacked bars per toss winner.
    pub fn draw_toss_stacked(ui: &mut egui::Ui, points: &[TossTeamPoint]) {
        let labels: Vec<String> = points.iter().map(|p| p.name.clone()).collect();

        let won: Vec<Bar> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Bar::new(i as f64, p.won as f64)
                    .name(format!("{}: {} won", p.name, p.won))
                    .width(0.6)
            })
            .collect();
        let lost: Vec<Bar> = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Bar::new(i as f64, p.lost as f64)
                    .name(format!("{}: {} lost", p.name, p.lost))
                    .width(0.6)
            })
            .collect();

        let won_chart = BarChart::new(won).name("Won").color(palette::WON);
        let lost_chart = BarChart::new(lost)
            .name("Lost")
            .color(palette::LOST)
            .stack_on(&[&won_chart]);

        Plot::new("toss_by_team")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .legend(Legend::default())
            .y_axis_label("Matches")
            .x_axis_formatter(move |mark, _range| Self::axis_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(won_chart);
                plot_ui.bar_chart(lost_chart);
            });
    }

    /// Average runs per season as a line with markers.
    pub fn draw_season_line(ui: &mut egui::Ui, points: &[SeasonPoint]) {
        let labels: Vec<String> = points.iter().map(|p| p.season.clone()).collect();
        let coords: Vec<[f64; 2]> = points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.avg_runs])
            .collect();

        Plot::new("season_trend")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label("Season")
            .y_axis_label("Average Runs")
            .x_axis_formatter(move |mark, _range| Self::axis_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(coords.iter().copied()))
                        .color(palette::PRIMARY)
                        .width(3.0)
                        .name("Average Runs"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(coords.iter().copied()))
                        .radius(6.0)
                        .color(palette::PRIMARY),
                );
            });
    }

    /// Pie with a legend of label and percentage.
    pub fn draw_pie(ui: &mut egui::Ui, slices: &[PieSlice]) {
        let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
        let angles = Self::pie_angles(&values);
        let total: f64 = values.iter().filter(|v| **v > 0.0).sum();

        ui.horizontal(|ui| {
            let size = CHART_HEIGHT - 20.0;
            let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
            let painter = ui.painter_at(rect);
            let center = rect.center();
            let radius = size / 2.0 - 8.0;

            for (slice, (start, end)) in slices.iter().zip(&angles) {
                let steps = (((end - start) / TAU * 96.0).ceil() as usize).max(1);
                let step = (end - start) / steps as f64;
                for k in 0..steps {
                    let a0 = start + step * k as f64;
                    let a1 = a0 + step;
                    let p0 = center + radius * egui::vec2(a0.cos() as f32, a0.sin() as f32);
                    let p1 = center + radius * egui::vec2(a1.cos() as f32, a1.sin() as f32);
                    painter.add(Shape::convex_polygon(
                        vec![center, p0, p1],
                        slice.color,
                        Stroke::NONE,
                    ));
                }
            }

            if angles.is_empty() {
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    "0",
                    FontId::proportional(14.0),
                    Color32::GRAY,
                );
            }

            ui.vertical(|ui| {
                for slice in slices {
                    let share = if total > 0.0 {
                        slice.value / total * 100.0
                    } else {
                        0.0
                    };
                    ui.horizontal(|ui| {
                        let (swatch, _) =
                            ui.allocate_exact_size(egui::vec2(14.0, 14.0), Sense::hover());
                        ui.painter().rect_filled(swatch, 3.0, slice.color);
                        ui.label(
                            RichText::new(format!("{} ({:.1}%)", slice.label, share)).size(13.0),
                        );
                    });
                }
            });
        });
    }
}
