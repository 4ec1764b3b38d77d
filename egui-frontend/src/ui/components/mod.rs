//! One module per screen, plus the navigation panel. Each module adds its
//! render methods to [`HerdTrackerApp`](crate::ui::app_state::HerdTrackerApp)
//! so screens stay colocated with the state slices they touch.

pub mod add_milk;
pub mod cow_list;
pub mod dashboard;
pub mod login;
pub mod nav;
pub mod qr_scanner;
pub mod reminders;
pub mod reports;
pub mod settings;
