mod app;
mod config;
mod logging;
mod ui;

use eframe::egui;
use grid_logging::grid_warn;

use crate::app::SoundalikeApp;
use crate::config::AppConfig;

fn main() -> eframe::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let config = AppConfig::from_env();
    if config.api_key.is_empty() {
        grid_warn!(
            "no api key configured; set {} to talk to the real service",
            config::ENV_API_KEY
        );
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Soundalike")
            .with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "soundalike",
        options,
        Box::new(|cc| Ok(Box::new(SoundalikeApp::new(cc, config)))),
    )
}
