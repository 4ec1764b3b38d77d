//! Login screen: the only screen visible before a user is signed in.

use eframe::egui;

use crate::ui::app_state::HerdTrackerApp;

impl HerdTrackerApp {
    pub fn render_login(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);
            ui.heading("Cow Dairy Farm");
            ui.label("Welcome back! Please sign in.");
            ui.add_space(16.0);

            if let Some(error) = &self.login_error {
                ui.colored_label(egui::Color32::RED, error);
                ui.add_space(8.0);
            }

            let mut submitted = false;

            ui.add(
                egui::TextEdit::singleline(&mut self.login_email)
                    .hint_text("Email address (e.g., admin@farm.com)")
                    .desired_width(280.0),
            );
            ui.add_space(4.0);
            let password_response = ui.add(
                egui::TextEdit::singleline(&mut self.login_password)
                    .hint_text("Password (use 'password')")
                    .password(true)
                    .desired_width(280.0),
            );
            if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }

            ui.add_space(12.0);
            if ui.button("Sign in").clicked() {
                submitted = true;
            }

            if submitted {
                self.handle_login();
            }

            ui.add_space(24.0);
            ui.weak("Admin: admin@farm.com");
            ui.weak("Staff: staff@farm.com");
            ui.weak("Password: password");
        });
    }
}
