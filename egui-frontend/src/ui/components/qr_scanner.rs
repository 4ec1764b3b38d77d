//! QR scanner screen. There is no camera: the scan is simulated with a
//! fixed delay and resolves to a random cow from the herd.

use eframe::egui;
use std::time::Instant;

use crate::ui::app_state::HerdTrackerApp;
use crate::ui::components::cow_list::render_cow_profile;

impl HerdTrackerApp {
    pub fn render_qr_scanner(&mut self, ui: &mut egui::Ui) {
        ui.label("Quickly access a cow's information by scanning the QR code on their tag.");
        ui.label("This is a simulation.");
        ui.add_space(12.0);

        let now = Instant::now();
        let scanning = self.backend.scan_service.is_scanning(now);

        let button_text = if scanning { "Scanning..." } else { "Simulate Scan" };
        if ui
            .add_enabled(!scanning, egui::Button::new(button_text))
            .clicked()
        {
            self.scanned_cow_id = None;
            self.backend.scan_service.start_scan(now);
        }

        if scanning {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.weak("Searching for QR code...");
            });
        }

        if let Some(scanned_id) = self.scanned_cow_id.clone() {
            if let Some(cow) = self
                .backend
                .herd_service
                .find_cow(&self.cows, &scanned_id)
                .cloned()
            {
                ui.add_space(12.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.heading(format!("{} ({})", cow.name, cow.tag_id));
                        if ui.button("Close").clicked() {
                            self.scanned_cow_id = None;
                        }
                    });
                    render_cow_profile(ui, &cow, self.today());
                });
            }
        }
    }
}
