// Month Calendar Application
// Main entry point

use month_calendar::models::settings::AppConfig;
use month_calendar::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Calendar");

    let config = AppConfig::load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Calendar App")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar App",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, config)))),
    )
}
