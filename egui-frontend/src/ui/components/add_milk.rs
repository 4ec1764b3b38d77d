//! Daily milk entry screen: one amount field per milking cow, a live
//! deviation hint while typing, and a save-all action.

use chrono::NaiveDate;
use eframe::egui;

use crate::ui::app_state::HerdTrackerApp;
use shared::EntryBadge;

impl HerdTrackerApp {
    pub fn render_add_milk(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        self.ensure_entries_for(today);

        ui.label(format!("Enter milk production for {}.", today));
        ui.add_space(8.0);

        if let Some(message) = self.success_message.clone() {
            ui.colored_label(egui::Color32::DARK_GREEN, message);
            ui.add_space(8.0);
        }

        let milking_cows = self.backend.herd_service.milking_cows(&self.cows);

        egui::Grid::new("milk_entry_grid")
            .num_columns(3)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for cow in &milking_cows {
                    ui.label(format!("{} ({})", cow.name, cow.tag_id));

                    ui.add(
                        egui::TextEdit::singleline(
                            self.daily_entries.entry(cow.id.clone()).or_default(),
                        )
                        .hint_text("Liters")
                        .desired_width(80.0),
                    );
                    let amount_text = self
                        .daily_entries
                        .get(&cow.id)
                        .cloned()
                        .unwrap_or_default();

                    ui.horizontal(|ui| {
                        ui.label(format!("Expected: {} L", cow.expected_yield));
                        match self
                            .backend
                            .milk_service
                            .entry_badge(cow.expected_yield, &amount_text)
                        {
                            Some(EntryBadge::Over(diff)) => {
                                ui.colored_label(
                                    egui::Color32::DARK_GREEN,
                                    format!("(+{:.1}L Over)", diff),
                                );
                            }
                            Some(EntryBadge::Under(diff)) => {
                                ui.colored_label(
                                    egui::Color32::RED,
                                    format!("({:.1}L Under)", diff),
                                );
                            }
                            Some(EntryBadge::Normal) => {
                                ui.weak("(Normal)");
                            }
                            None => {}
                        }
                    });
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        if ui.button("Save All Records").clicked() {
            self.save_daily_records(today);
        }
    }
}
