//! Derived reminder entries for the reminders screen.
//!
//! Reminders are computed on demand from herd data and never stored.

use chrono::NaiveDate;
use shared::ReminderKind;

use crate::backend::domain::models::cow::Cow;

/// A cow paired with the due date relevant for one reminder kind, before
/// window filtering. Cows without a due date produce a candidate with
/// `due_date: None` and are dropped by the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderCandidate {
    pub cow_id: String,
    pub cow_name: String,
    pub tag_id: String,
    pub due_date: Option<NaiveDate>,
    pub kind: ReminderKind,
}

impl ReminderCandidate {
    pub fn vaccination(cow: &Cow) -> Self {
        Self {
            cow_id: cow.id.clone(),
            cow_name: cow.name.clone(),
            tag_id: cow.tag_id.clone(),
            due_date: cow.next_vaccination_due(),
            kind: ReminderKind::Vaccination,
        }
    }

    pub fn delivery(cow: &Cow) -> Self {
        Self {
            cow_id: cow.id.clone(),
            cow_name: cow.name.clone(),
            tag_id: cow.tag_id.clone(),
            due_date: cow.delivery_due(),
            kind: ReminderKind::Delivery,
        }
    }
}

/// A reminder that passed the window filter.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub cow_id: String,
    pub cow_name: String,
    pub tag_id: String,
    pub due_date: NaiveDate,
    pub kind: ReminderKind,
    /// Whole days from the reference date to the due date; negative means overdue.
    pub days_until: i64,
}

impl Reminder {
    pub fn is_overdue(&self) -> bool {
        self.days_until < 0
    }

    /// Magnitude of lateness in whole days; 0 when not overdue.
    pub fn overdue_days(&self) -> i64 {
        if self.is_overdue() {
            self.days_until.abs()
        } else {
            0
        }
    }
}
