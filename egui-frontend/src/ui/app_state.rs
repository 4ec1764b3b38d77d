//! # App State Module
//!
//! Central application state for the herd tracker.
//!
//! Every collection the screens work on (users, herd, milk records) lives
//! here, in one place, together with the session context and per-screen form
//! buffers. Screens receive exactly the slices they need, and every mutation
//! goes through a handler on this struct that swaps in the new value a
//! domain service returned. There are no globals and no hidden mutation.

use chrono::NaiveDate;
use log::info;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::backend::data;
use crate::backend::domain::commands::auth::LoginCommand;
use crate::backend::domain::commands::milk::SaveDailyRecordsCommand;
use crate::backend::domain::models::cow::Cow;
use crate::backend::domain::models::milk_record::MilkRecord;
use crate::backend::Backend;
use shared::{Gender, Role, User};

/// How long the save confirmation banner stays up.
const MESSAGE_DURATION: Duration = Duration::from_secs(3);

/// Screens reachable from the navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Cows,
    AddMilk,
    Reminders,
    Reports,
    QrScanner,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Screen::Dashboard,
        Screen::Cows,
        Screen::AddMilk,
        Screen::Reminders,
        Screen::Reports,
        Screen::QrScanner,
        Screen::Settings,
    ];

    /// Short label for the navigation panel.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Cows => "Cows",
            Screen::AddMilk => "Add Milk",
            Screen::Reminders => "Reminders",
            Screen::Reports => "Reports",
            Screen::QrScanner => "QR Scanner",
            Screen::Settings => "Settings",
        }
    }

    /// Heading shown at the top of the screen.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Cows => "Cow Information",
            Screen::AddMilk => "Add Daily Milk Records",
            Screen::Reminders => "Reminders",
            Screen::Reports => "Milk Production Analysis",
            Screen::QrScanner => "QR Code Scanner",
            Screen::Settings => "Settings",
        }
    }
}

/// Main application struct for the egui herd tracker.
pub struct HerdTrackerApp {
    pub backend: Backend,

    // Collections supplied by the mock data source at startup
    pub users: Vec<User>,
    pub cows: Vec<Cow>,
    pub milk_records: Vec<MilkRecord>,

    // Session state
    pub current_user: Option<User>,
    pub current_screen: Screen,

    // Login form
    pub login_email: String,
    pub login_password: String,
    pub login_error: Option<String>,

    // Cow registry
    pub search_term: String,
    pub gender_filter: Option<Gender>,
    pub selected_cow_id: Option<String>,

    // Milk entry form: raw text per cow id, rebuilt when the day rolls over
    pub daily_entries: HashMap<String, String>,
    pub entries_date: Option<NaiveDate>,

    // Reports: `None` selects the herd total series
    pub report_cow_id: Option<String>,

    // Scanner
    pub scanned_cow_id: Option<String>,

    // Settings (notification toggles are display-only state, nothing fires)
    pub notify_vaccinations: bool,
    pub notify_deliveries: bool,
    pub notify_milk_alerts: bool,
    pub backup_json: Option<String>,

    // Transient feedback
    pub success_message: Option<String>,
    message_expires_at: Option<Instant>,
}

impl HerdTrackerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        info!("initializing herd tracker app");

        let today = chrono::Local::now().date_naive();
        let seed = data::load(today);

        Self {
            backend: Backend::new(),

            users: seed.users,
            cows: seed.cows,
            milk_records: seed.milk_records,

            current_user: None,
            current_screen: Screen::Dashboard,

            login_email: String::new(),
            login_password: String::new(),
            login_error: None,

            search_term: String::new(),
            gender_filter: None,
            selected_cow_id: None,

            daily_entries: HashMap::new(),
            entries_date: None,

            report_cow_id: None,

            scanned_cow_id: None,

            notify_vaccinations: true,
            notify_deliveries: true,
            notify_milk_alerts: false,
            backup_json: None,

            success_message: None,
            message_expires_at: None,
        }
    }

    /// The reference date for every "today" in the app: local date at day
    /// granularity. No timezone normalization is performed.
    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    pub fn is_admin(&self) -> bool {
        matches!(&self.current_user, Some(user) if user.role == Role::Admin)
    }

    pub fn handle_login(&mut self) {
        let command = LoginCommand {
            email: self.login_email.clone(),
            password: self.login_password.clone(),
        };
        match self.backend.auth_service.login(&self.users, command) {
            Ok(user) => {
                self.current_user = Some(user);
                self.current_screen = Screen::Dashboard;
                self.login_error = None;
                self.login_password.clear();
            }
            Err(error) => {
                self.login_error = Some(error.to_string());
            }
        }
    }

    pub fn handle_logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!("{} logged out", user.name);
        }
        self.login_password.clear();
    }

    /// Rebuild the milk entry form when first shown or when the day rolls
    /// over mid-session, prefilled from today's existing records.
    pub fn ensure_entries_for(&mut self, today: NaiveDate) {
        if self.entries_date != Some(today) {
            self.daily_entries =
                self.backend
                    .milk_service
                    .initial_entries(&self.cows, &self.milk_records, today);
            self.entries_date = Some(today);
        }
    }

    /// Save the entry form: the service returns the full replacement record
    /// list, which becomes the new state.
    pub fn save_daily_records(&mut self, today: NaiveDate) {
        let command = SaveDailyRecordsCommand {
            date: today,
            entries: self.daily_entries.clone(),
        };
        let result = self
            .backend
            .milk_service
            .save_daily_records(&self.milk_records, command);
        info!("milk entry saved {} records for {}", result.saved_count, today);
        self.milk_records = result.records;
        self.show_success(result.success_message);
    }

    pub fn show_success(&mut self, message: String) {
        self.success_message = Some(message);
        self.message_expires_at = Some(Instant::now() + MESSAGE_DURATION);
    }

    pub fn clear_expired_messages(&mut self) {
        if let Some(expires_at) = self.message_expires_at {
            if Instant::now() >= expires_at {
                self.success_message = None;
                self.message_expires_at = None;
            }
        }
    }
}
