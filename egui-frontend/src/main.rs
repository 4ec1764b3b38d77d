use eframe::egui;
use log::info;

mod backend;
mod ui;

use ui::app_state::HerdTrackerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting herd tracker egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Cow Dairy Farm")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Cow Dairy Farm",
        options,
        Box::new(|cc| Ok(Box::new(HerdTrackerApp::new(cc)))),
    )
}
