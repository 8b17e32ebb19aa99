// Rust Date Picker Demo
// Main entry point

use anyhow::Result;
use rust_datepicker::models::settings::PickerSettings;
use rust_datepicker::services::settings::{default_config_path, SettingsService};
use rust_datepicker::ui_egui::DatePickerApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Date Picker demo");

    let settings = load_settings_or_default(&SettingsService::new(default_config_path()));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Date Picker",
        options,
        Box::new(move |cc| {
            let app = DatePickerApp::new(cc, settings)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run date picker demo: {}", e))
}

fn load_settings_or_default(service: &SettingsService) -> PickerSettings {
    match service.get() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!(
                "Failed to load settings from {}: {}; using defaults",
                service.path().display(),
                err
            );
            PickerSettings::default()
        }
    }
}
