//! Reminders screen: upcoming vaccinations and expected deliveries, with
//! overdue items surfaced first. Each card links to the cow's profile.

use chrono::NaiveDate;
use eframe::egui;

use crate::backend::domain::models::reminder::Reminder;
use crate::ui::app_state::{HerdTrackerApp, Screen};

impl HerdTrackerApp {
    pub fn render_reminders(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        let vaccinations = self
            .backend
            .reminder_service
            .upcoming_vaccinations(&self.cows, today);
        let deliveries = self
            .backend
            .reminder_service
            .upcoming_deliveries(&self.cows, today);

        ui.strong("Upcoming Vaccinations");
        if vaccinations.is_empty() {
            ui.weak("No upcoming vaccinations in the next 30 days.");
        } else {
            for reminder in &vaccinations {
                self.reminder_card(ui, reminder);
            }
        }

        ui.add_space(16.0);
        ui.strong("Expected Deliveries");
        if deliveries.is_empty() {
            ui.weak("No expected deliveries in the next 60 days.");
        } else {
            for reminder in &deliveries {
                self.reminder_card(ui, reminder);
            }
        }
    }

    fn reminder_card(&mut self, ui: &mut egui::Ui, reminder: &Reminder) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            if ui
                .link(format!("{} ({})", reminder.cow_name, reminder.tag_id))
                .clicked()
            {
                self.selected_cow_id = Some(reminder.cow_id.clone());
                self.current_screen = Screen::Cows;
            }
            ui.label(format!("{} Due: {}", reminder.kind, reminder.due_date));
            if reminder.is_overdue() {
                ui.colored_label(
                    egui::Color32::RED,
                    format!("{} days overdue", reminder.overdue_days()),
                );
            } else {
                ui.weak(format!("In {} days", reminder.days_until));
            }
        });
    }
}
