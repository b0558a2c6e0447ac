use eframe::egui;
use env_logger::Env;

mod app;
mod audio;
mod config;
mod library;
mod player;
mod ui;

use app::PlayerApp;
use audio::RodioBackend;
use config::Settings;

fn load_settings() -> Settings {
    match Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                log::warn!("invalid config, using defaults: {msg}");
                Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            log::warn!("failed to load config, using defaults: {e}");
            Settings::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let settings = load_settings();

    let backend = match RodioBackend::new() {
        Ok(b) => b,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.ui.window_width, settings.ui.window_height])
            .with_title("Quaver"),
        ..Default::default()
    };

    let app = PlayerApp::new(backend, settings);
    eframe::run_native("Quaver", native_options, Box::new(|_cc| Ok(Box::new(app))))
}
