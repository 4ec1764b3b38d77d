//! Dashboard screen: stat cards, alert counters and quick actions.

use chrono::NaiveDate;
use eframe::egui;

use crate::ui::app_state::{HerdTrackerApp, Screen};

impl HerdTrackerApp {
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        let summary = self
            .backend
            .dashboard_service
            .summary(&self.cows, &self.milk_records, today);

        ui.horizontal(|ui| {
            stat_card(ui, "Total Cows", summary.total_cows.to_string());
            stat_card(ui, "Today's Milk", format!("{} L", summary.total_milk_today));
            stat_card(ui, "Average Yield", format!("{} L", summary.average_yield));
        });

        ui.add_space(16.0);
        ui.strong("Alerts & Reminders");
        egui::Grid::new("dashboard_alerts").num_columns(2).show(ui, |ui| {
            ui.label("Upcoming Vaccinations (30 days)");
            ui.colored_label(
                egui::Color32::DARK_RED,
                summary.vaccinations_due_soon.to_string(),
            );
            ui.end_row();

            ui.label("Expected Deliveries (30 days)");
            ui.colored_label(
                egui::Color32::DARK_BLUE,
                summary.deliveries_due_soon.to_string(),
            );
            ui.end_row();

            ui.label("Cows under observation");
            ui.colored_label(
                egui::Color32::from_rgb(180, 120, 0),
                summary.cows_under_observation.to_string(),
            );
            ui.end_row();
        });

        ui.add_space(16.0);
        ui.strong("Quick Actions");
        ui.horizontal(|ui| {
            if ui.button("Add Milk Records").clicked() {
                self.current_screen = Screen::AddMilk;
            }
            if ui.button("View All Cows").clicked() {
                self.current_screen = Screen::Cows;
            }
            if ui.button("View Reports").clicked() {
                self.current_screen = Screen::Reports;
            }
            if ui.button("Scan QR Code").clicked() {
                self.current_screen = Screen::QrScanner;
            }
        });
    }
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: String) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.weak(title);
            ui.heading(value);
        });
    });
}
