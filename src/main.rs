//! IPL Insights - IPL Data Analysis Dashboard
//!
//! Usage: `ipl_insights [SOURCE]` where SOURCE is a directory or an
//! `http(s)://` base URL holding the dataset files.

use anyhow::{anyhow, Context};
use eframe::egui;
use ipl_insights::config::{AppConfig, DEFAULT_LOG_FILTER};
use ipl_insights::gui::DashboardApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()
        .context("invalid configuration")?
        .with_args(std::env::args().skip(1));

    tracing::info!(source = %config.data_source, "Starting IPL Insights");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 700.0])
            .with_title("IPL Insights"),
        ..Default::default()
    };

    eframe::run_native(
        "IPL Insights",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)?))),
    )
    .map_err(|e| anyhow!("dashboard exited with error: {e}"))
}
