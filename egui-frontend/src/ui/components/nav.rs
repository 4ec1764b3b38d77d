//! Navigation panel: screen switcher plus the signed-in user and logout.

use eframe::egui;

use crate::ui::app_state::{HerdTrackerApp, Screen};

impl HerdTrackerApp {
    pub fn render_nav(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("Cow Dairy Farm");
        ui.separator();

        for screen in Screen::ALL {
            let selected = self.current_screen == screen;
            if ui.selectable_label(selected, screen.nav_label()).clicked() {
                self.current_screen = screen;
            }
        }

        ui.separator();
        if let Some(user) = &self.current_user {
            ui.label(user.name.clone());
            ui.weak(user.role.to_string());
        }
        if ui.button("Log out").clicked() {
            self.handle_logout();
        }
    }
}
