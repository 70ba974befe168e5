//! IPL Insights Main Application
//! Main window with control panel and chart viewer.

use crate::config::AppConfig;
use crate::data::{source_for, DashboardState, DataLoader, LoadError, LoadedData};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::stats::{DashboardViews, SeasonFilter, ViewParams};
use egui::{Color32, RichText, SidePanel};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::info;

/// Load result from the background runtime, tagged with its attempt.
struct LoadMessage {
    generation: u64,
    result: Result<LoadedData, LoadError>,
}

/// Main application window.
pub struct DashboardApp {
    runtime: Runtime,
    config: AppConfig,
    state: DashboardState,
    params: ViewParams,
    views: DashboardViews,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    load_tx: Sender<LoadMessage>,
    load_rx: Receiver<LoadMessage>,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (load_tx, load_rx) = channel();

        let mut app = Self {
            runtime,
            control_panel: ControlPanel::new(config.data_source.clone()),
            params: ViewParams::with_top_n(config.default_top_n),
            config,
            state: DashboardState::new(),
            views: DashboardViews::default(),
            chart_viewer: ChartViewer::new(),
            load_tx,
            load_rx,
        };
        app.start_load(&cc.egui_ctx);
        Ok(app)
    }

    /// Fetch every dataset on the runtime. Earlier attempts still in flight
    /// are superseded by the new generation.
    fn start_load(&mut self, ctx: &egui::Context) {
        let generation = self.state.begin_load();
        let source = Arc::from(source_for(&self.config.data_source));
        let loader = DataLoader::new(source).with_timeout(self.config.fetch_timeout);
        info!(generation, "starting load");

        let tx = self.load_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = loader.load().await;
            let _ = tx.send(LoadMessage { generation, result });
            ctx.request_repaint();
        });
    }

    /// Pick a dataset folder and reload from it.
    fn handle_open_folder(&mut self, ctx: &egui::Context) {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            self.config.data_source = dir.to_string_lossy().to_string();
            self.control_panel.source_label = self.config.data_source.clone();
            self.start_load(ctx);
        }
    }

    /// Check for load results
    fn check_load_results(&mut self) {
        while let Ok(message) = self.load_rx.try_recv() {
            if self.state.apply(message.generation, message.result) {
                self.refresh_views();
            }
        }
    }

    fn refresh_views(&mut self) {
        self.views = DashboardViews::derive(&self.state.bundle().data, &self.params);

        if let SeasonFilter::Year(year) = self.params.season {
            if !self.views.seasons.contains(&year) {
                self.params.season = SeasonFilter::All;
                self.views = DashboardViews::derive(&self.state.bundle().data, &self.params);
            }
        }
    }

    fn show_error(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, error: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(
                RichText::new("⚠ Error Loading Data")
                    .size(22.0)
                    .strong()
                    .color(Color32::from_rgb(220, 53, 69)),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(error).size(13.0));
            ui.add_space(12.0);
            if ui.button(RichText::new("Retry").size(15.0)).clicked() {
                self.start_load(ctx);
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui, &self.state) {
                        ControlPanelAction::OpenFolder => self.handle_open_folder(ctx),
                        ControlPanelAction::Reload => self.start_load(ctx),
                        ControlPanelAction::None => {}
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.is_loading() {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }

            if let Some(error) = self.state.bundle().error.clone() {
                self.show_error(ctx, ui, &error);
                return;
            }

            if self
                .chart_viewer
                .show(ui, &self.views, &mut self.params)
            {
                self.refresh_views();
            }
        });
    }
}
