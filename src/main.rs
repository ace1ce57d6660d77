mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;
mod views;

use app::CatalogDashApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_args(std::env::args());
    log::info!("Reading products from {}", config.data_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Catalog Dash – Product Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(CatalogDashApp::new(config)))),
    )
}
