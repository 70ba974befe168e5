//! Control Panel Widget
//! Left side panel with the data source, load controls and headline stats.

use crate::data::{DashboardState, DatasetKind};
use egui::{Color32, RichText};

const CARD_WIDTH: f32 = 280.0;

/// Left side control panel.
pub struct ControlPanel {
    pub source_label: String,
}

impl ControlPanel {
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, state: &DashboardState) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🏏 IPL Data Analysis Dashboard")
                    .size(20.0)
                    .color(Color32::from_rgb(0x36, 0x60, 0x92)),
            );
            ui.label(
                RichText::new("Indian Premier League statistics")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&self.source_label).size(12.0).monospace());
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    ui.add_enabled_ui(!state.is_loading(), |ui| {
                        if ui.button("📂 Open Folder").clicked() {
                            action = ControlPanelAction::OpenFolder;
                        }
                        if ui.button("🔄 Reload").clicked() {
                            action = ControlPanelAction::Reload;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Stat Cards =====
        ui.label(RichText::new("📊 Overview").size(14.0).strong());
        ui.add_space(5.0);

        let stats = state.stats();
        Self::stat_card(
            ui,
            "Top Scorer",
            &stats.top_scorer,
            Some(format!("{} runs", stats.top_score)),
        );
        Self::stat_card(ui, "Total Players", &stats.total_players.to_string(), None);
        Self::stat_card(
            ui,
            "Average Runs",
            &format!("{:.0}", stats.avg_runs),
            None,
        );
        Self::stat_card(ui, "Total Matches", &stats.total_matches.to_string(), None);

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new("📋 Datasets").size(14.0).strong());
        ui.add_space(5.0);

        let bundle = state.bundle();
        egui::Grid::new("dataset_counts")
            .striped(true)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for kind in DatasetKind::ALL {
                    let name = kind.file_name().trim_end_matches(".json");
                    let label = if kind.is_critical() {
                        RichText::new(name).size(11.0).strong()
                    } else {
                        RichText::new(name).size(11.0)
                    };
                    ui.label(label);
                    ui.label(RichText::new(bundle.data.len_of(kind).to_string()).size(11.0));
                    ui.end_row();
                }
            });

        ui.add_space(8.0);

        let (status, status_color) = if bundle.loading {
            ("Loading...".to_string(), Color32::GRAY)
        } else if let Some(error) = &bundle.error {
            (format!("Error: {}", error), Color32::from_rgb(220, 53, 69))
        } else {
            ("Ready".to_string(), Color32::from_rgb(40, 167, 69))
        };
        ui.label(RichText::new(status).size(11.0).color(status_color));

        action
    }

    fn stat_card(ui: &mut egui::Ui, title: &str, value: &str, subtitle: Option<String>) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.label(RichText::new(title).size(11.0).color(Color32::GRAY));
                ui.label(RichText::new(value).size(20.0).strong());
                if let Some(subtitle) = subtitle {
                    ui.label(RichText::new(subtitle).size(11.0).color(Color32::GRAY));
                }
            });
        ui.add_space(6.0);
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    OpenFolder,
    Reload,
}
