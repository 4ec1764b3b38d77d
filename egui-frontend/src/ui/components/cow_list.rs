//! Cow registry screen: search, gender filter, table and profile window.

use chrono::NaiveDate;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::backend::domain::commands::herd::CowFilterQuery;
use crate::backend::domain::models::cow::Cow;
use crate::ui::app_state::HerdTrackerApp;
use shared::Gender;

impl HerdTrackerApp {
    pub fn render_cow_list(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(
                egui::TextEdit::singleline(&mut self.search_term)
                    .hint_text("name, tag, or breed")
                    .desired_width(220.0),
            );

            egui::ComboBox::from_id_source("gender_filter")
                .selected_text(match self.gender_filter {
                    None => "All".to_string(),
                    Some(gender) => gender.to_string(),
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.gender_filter, None, "All");
                    ui.selectable_value(&mut self.gender_filter, Some(Gender::Female), "Female");
                    ui.selectable_value(&mut self.gender_filter, Some(Gender::Male), "Male");
                });
        });
        ui.add_space(8.0);

        let query = CowFilterQuery {
            gender: self.gender_filter,
            search: self.search_term.clone(),
        };
        let cows = self.backend.herd_service.filter_cows(&self.cows, &query);

        if cows.is_empty() {
            ui.weak("No cows match the current filter.");
        } else {
            self.render_cow_table(ui, &cows);
        }

        self.render_cow_profile_window(ui, today);
    }

    fn render_cow_table(&mut self, ui: &mut egui::Ui, cows: &[Cow]) {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(100.0)) // name
            .column(Column::auto().at_least(80.0)) // tag
            .column(Column::auto().at_least(120.0)) // breed
            .column(Column::auto().at_least(60.0)) // gender
            .column(Column::auto().at_least(120.0)) // health
            .column(Column::remainder()) // expected yield
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Tag");
                });
                header.col(|ui| {
                    ui.strong("Breed");
                });
                header.col(|ui| {
                    ui.strong("Gender");
                });
                header.col(|ui| {
                    ui.strong("Health");
                });
                header.col(|ui| {
                    ui.strong("Expected Yield");
                });
            })
            .body(|mut body| {
                for cow in cows {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            if ui.link(&cow.name).clicked() {
                                self.selected_cow_id = Some(cow.id.clone());
                            }
                        });
                        row.col(|ui| {
                            ui.label(&cow.tag_id);
                        });
                        row.col(|ui| {
                            ui.label(&cow.breed);
                        });
                        row.col(|ui| {
                            ui.label(cow.gender.to_string());
                        });
                        row.col(|ui| {
                            ui.label(cow.health_status.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format!("{} L/day", cow.expected_yield));
                        });
                    });
                }
            });
    }

    fn render_cow_profile_window(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        let Some(selected_id) = self.selected_cow_id.clone() else {
            return;
        };
        let Some(cow) = self
            .backend
            .herd_service
            .find_cow(&self.cows, &selected_id)
            .cloned()
        else {
            self.selected_cow_id = None;
            return;
        };

        let mut open = true;
        egui::Window::new(format!("{} ({})", cow.name, cow.tag_id))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ui.ctx(), |ui| {
                render_cow_profile(ui, &cow, today);
            });
        if !open {
            self.selected_cow_id = None;
        }
    }
}

/// Full profile block, shared with the QR scanner's result card.
pub fn render_cow_profile(ui: &mut egui::Ui, cow: &Cow, today: NaiveDate) {
    ui.strong("Key Info");
    egui::Grid::new(format!("profile_{}", cow.id))
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Breed:");
            ui.label(&cow.breed);
            ui.end_row();
            ui.label("Age:");
            ui.label(format!("{} years", cow.age_years(today)));
            ui.end_row();
            ui.label("Gender:");
            ui.label(cow.gender.to_string());
            ui.end_row();
            ui.label("Health:");
            ui.label(cow.health_status.to_string());
            ui.end_row();
            ui.label("Expected Yield:");
            ui.label(format!("{} L/day", cow.expected_yield));
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.strong("Pregnancy Status");
    if cow.pregnancy.is_pregnant {
        ui.label("Pregnant");
        if let Some(due_date) = cow.pregnancy.due_date {
            ui.label(format!("Due Date: {}", due_date));
        }
        if let Some(last_bred) = cow.pregnancy.last_bred_date {
            ui.label(format!("Last Bred: {}", last_bred));
        }
    } else {
        ui.label("Not Pregnant");
    }

    ui.add_space(8.0);
    ui.strong("Vaccination History");
    if cow.vaccinations.is_empty() {
        ui.weak("No vaccinations recorded.");
    } else {
        for vaccination in &cow.vaccinations {
            ui.label(format!(
                "{}: {} (Next: {})",
                vaccination.name, vaccination.date, vaccination.next_due_date
            ));
        }
    }

    if !cow.notes.is_empty() {
        ui.add_space(8.0);
        ui.strong("Notes");
        ui.label(&cow.notes);
    }
}
