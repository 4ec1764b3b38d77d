//! # App Coordinator Module
//!
//! The main `eframe::App` update loop: resolves the pending simulated scan,
//! expires transient messages, and routes to the active screen. The login
//! screen owns the whole window until a user is signed in.

use eframe::egui;
use std::time::{Duration, Instant};

use crate::ui::app_state::{HerdTrackerApp, Screen};

impl eframe::App for HerdTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clear_expired_messages();

        if self.current_user.is_none() {
            egui::CentralPanel::default().show(ctx, |ui| {
                self.render_login(ui);
            });
            return;
        }

        // The simulated scan has no callback: the frame loop polls it. Keep
        // repainting while one is pending so the resolution isn't stuck
        // waiting for the next input event.
        let now = Instant::now();
        if self.backend.scan_service.is_scanning(now) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        if let Some(cow) = self.backend.scan_service.poll(now, &self.cows) {
            self.scanned_cow_id = Some(cow.id.clone());
        }

        if self.success_message.is_some() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }

        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.render_nav(ui);
            });

        let today = self.today();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(self.current_screen.title());
                ui.add_space(8.0);

                match self.current_screen {
                    Screen::Dashboard => self.render_dashboard(ui, today),
                    Screen::Cows => self.render_cow_list(ui, today),
                    Screen::AddMilk => self.render_add_milk(ui, today),
                    Screen::Reminders => self.render_reminders(ui, today),
                    Screen::Reports => self.render_reports(ui, today),
                    Screen::QrScanner => self.render_qr_scanner(ui),
                    Screen::Settings => self.render_settings(ui),
                }
            });
        });
    }
}
