//! Settings screen: user management (admins only), notification preferences
//! and the data backup stub.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use log::error;

use crate::ui::app_state::HerdTrackerApp;

impl HerdTrackerApp {
    pub fn render_settings(&mut self, ui: &mut egui::Ui) {
        ui.strong("User Management");
        if self.is_admin() {
            self.render_user_table(ui);
        } else {
            ui.weak("You do not have permission to manage users. Please contact an admin.");
        }

        ui.add_space(16.0);
        ui.strong("Notification Preferences");
        ui.checkbox(&mut self.notify_vaccinations, "Vaccination Reminders");
        ui.checkbox(&mut self.notify_deliveries, "Pregnancy Reminders");
        ui.checkbox(&mut self.notify_milk_alerts, "Low/High Milk Alerts");

        ui.add_space(16.0);
        ui.strong("Data Management");
        ui.horizontal(|ui| {
            if ui.button("Backup Data").clicked() {
                match self.backend.export_service.export_snapshot(
                    &self.users,
                    &self.cows,
                    &self.milk_records,
                ) {
                    Ok(json) => self.backup_json = Some(json),
                    Err(err) => error!("backup failed: {:#}", err),
                }
            }
            ui.add_enabled(false, egui::Button::new("Restore Data"))
                .on_disabled_hover_text("Restore is not implemented.");
        });

        if let Some(json) = &self.backup_json {
            ui.add_space(8.0);
            ui.collapsing("Backup JSON", |ui| {
                egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                    ui.monospace(json);
                });
            });
        }
    }

    fn render_user_table(&mut self, ui: &mut egui::Ui) {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(120.0)) // name
            .column(Column::auto().at_least(160.0)) // email
            .column(Column::remainder()) // role
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Email");
                });
                header.col(|ui| {
                    ui.strong("Role");
                });
            })
            .body(|mut body| {
                for user in &self.users {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&user.name);
                        });
                        row.col(|ui| {
                            ui.label(&user.email);
                        });
                        row.col(|ui| {
                            ui.label(user.role.to_string());
                        });
                    });
                }
            });
    }
}
