//! Reports screen: production trend chart and today's performance summary.

use chrono::NaiveDate;
use eframe::egui;
use egui_plot::{CoordinatesFormatter, Corner, Line, Plot, PlotPoints};

use crate::ui::app_state::HerdTrackerApp;

impl HerdTrackerApp {
    pub fn render_reports(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        ui.strong("Production Trends");
        self.render_series_picker(ui);
        ui.add_space(8.0);
        self.render_production_chart(ui);

        ui.add_space(16.0);
        ui.strong("Today's Performance Summary");
        self.render_daily_summary(ui, today);

        ui.add_space(12.0);
        ui.add_enabled(false, egui::Button::new("Export Report (PDF)"))
            .on_disabled_hover_text("PDF export is not implemented.");
    }

    fn render_series_picker(&mut self, ui: &mut egui::Ui) {
        let milking_cows = self.backend.herd_service.milking_cows(&self.cows);

        let selected_text = match &self.report_cow_id {
            None => "All Cows (Total)".to_string(),
            Some(id) => self
                .backend
                .herd_service
                .find_cow(&self.cows, id)
                .map(|cow| cow.name.clone())
                .unwrap_or_else(|| "Unknown cow".to_string()),
        };

        egui::ComboBox::from_id_source("report_series")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.report_cow_id, None, "All Cows (Total)");
                for cow in &milking_cows {
                    ui.selectable_value(
                        &mut self.report_cow_id,
                        Some(cow.id.clone()),
                        cow.name.clone(),
                    );
                }
            });
    }

    fn render_production_chart(&mut self, ui: &mut egui::Ui) {
        let points = self
            .backend
            .report_service
            .aggregate(&self.milk_records, &self.cows);

        let (series_name, series) = match &self.report_cow_id {
            None => (
                "Total Production".to_string(),
                self.backend.report_service.total_series(&points),
            ),
            Some(cow_id) => {
                let name = self
                    .backend
                    .herd_service
                    .find_cow(&self.cows, cow_id)
                    .map(|cow| cow.name.clone())
                    .unwrap_or_else(|| cow_id.clone());
                (name, self.backend.report_service.series_for_cow(&points, cow_id))
            }
        };

        if series.is_empty() {
            ui.weak("No production data to chart for this selection.");
            return;
        }

        let raw_points: Vec<[f64; 2]> = series
            .iter()
            .map(|(date, amount)| [day_timestamp(*date), *amount])
            .collect();
        let line_points: PlotPoints = raw_points.iter().copied().collect();
        let line = Line::new(line_points).name(series_name).width(2.0);

        let max_amount = series.iter().map(|(_, amount)| *amount).fold(0.0, f64::max);

        Plot::new("production_chart")
            .height(300.0)
            .include_y(0.0)
            .include_y(max_amount * 1.1)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .coordinates_formatter(
                Corner::LeftBottom,
                CoordinatesFormatter::new(|point, _bounds| {
                    if let Some(datetime) = chrono::DateTime::from_timestamp(point.x as i64, 0) {
                        format!("{}: {:.1} L", datetime.format("%Y-%m-%d"), point.y)
                    } else {
                        format!("{:.1} L", point.y)
                    }
                }),
            )
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    }

    fn render_daily_summary(&mut self, ui: &mut egui::Ui, today: NaiveDate) {
        let summary = self
            .backend
            .report_service
            .daily_summary(&self.cows, &self.milk_records, today);

        ui.columns(3, |columns| {
            columns[0].colored_label(
                egui::Color32::DARK_GREEN,
                format!("Over-performing Cows ({})", summary.over.len()),
            );
            for cow in &summary.over {
                columns[0].label(&cow.name);
            }

            columns[1].colored_label(
                egui::Color32::RED,
                format!("Under-performing Cows ({})", summary.under.len()),
            );
            for cow in &summary.under {
                columns[1].label(&cow.name);
            }

            columns[2].colored_label(
                egui::Color32::GRAY,
                format!("Meeting Expectations ({})", summary.meeting.len()),
            );
            for cow in &summary.meeting {
                columns[2].label(&cow.name);
            }
        });
    }
}

/// Midnight UTC timestamp for a calendar date, used as the chart's x value.
fn day_timestamp(date: NaiveDate) -> f64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp() as f64)
        .unwrap_or(0.0)
}
