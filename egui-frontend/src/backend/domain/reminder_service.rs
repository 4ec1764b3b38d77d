//! Reminder computation: due-date window filtering for vaccinations and
//! expected deliveries.
//!
//! The reminders screen shows items that are overdue or coming up soon. The
//! window rule is one-sided: an item is included whenever its due date is
//! less than the horizon ahead of the reference date, with no lower bound,
//! so overdue items always make the list.

use chrono::NaiveDate;
use log::debug;

use crate::backend::domain::models::cow::Cow;
use crate::backend::domain::models::reminder::{Reminder, ReminderCandidate};

/// Horizon for upcoming vaccinations, in days.
pub const VACCINATION_HORIZON_DAYS: i64 = 30;

/// Horizon for expected deliveries, in days. Longer than the vaccination
/// horizon: gestation planning needs more lead time.
pub const DELIVERY_HORIZON_DAYS: i64 = 60;

#[derive(Clone, Default)]
pub struct ReminderService;

impl ReminderService {
    pub fn new() -> Self {
        Self
    }

    /// Vaccination reminders within the 30-day horizon (or overdue),
    /// earliest due date first.
    pub fn upcoming_vaccinations(&self, cows: &[Cow], today: NaiveDate) -> Vec<Reminder> {
        let candidates = cows.iter().map(ReminderCandidate::vaccination).collect();
        let reminders = self.filter_due_within_window(candidates, today, VACCINATION_HORIZON_DAYS);
        debug!(
            "{} of {} cows have a vaccination due within {} days",
            reminders.len(),
            cows.len(),
            VACCINATION_HORIZON_DAYS
        );
        reminders
    }

    /// Delivery reminders for pregnant cows within the 60-day horizon (or
    /// overdue), earliest due date first.
    pub fn upcoming_deliveries(&self, cows: &[Cow], today: NaiveDate) -> Vec<Reminder> {
        let candidates = cows
            .iter()
            .filter(|cow| cow.pregnancy.is_pregnant)
            .map(ReminderCandidate::delivery)
            .collect();
        let reminders = self.filter_due_within_window(candidates, today, DELIVERY_HORIZON_DAYS);
        debug!(
            "{} cows have an expected delivery within {} days",
            reminders.len(),
            DELIVERY_HORIZON_DAYS
        );
        reminders
    }

    /// Core window filter.
    ///
    /// Includes a candidate iff `due_date - reference_date < horizon_days`
    /// in whole days (strict). Overdue candidates (negative difference) are
    /// always included; candidates without a due date never are. Output is
    /// sorted ascending by due date, so the most overdue item comes first.
    pub fn filter_due_within_window(
        &self,
        candidates: Vec<ReminderCandidate>,
        reference_date: NaiveDate,
        horizon_days: i64,
    ) -> Vec<Reminder> {
        let mut reminders: Vec<Reminder> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let due_date = candidate.due_date?;
                let days_until = (due_date - reference_date).num_days();
                if days_until < horizon_days {
                    Some(Reminder {
                        cow_id: candidate.cow_id,
                        cow_name: candidate.cow_name,
                        tag_id: candidate.tag_id,
                        due_date,
                        kind: candidate.kind,
                        days_until,
                    })
                } else {
                    None
                }
            })
            .collect();

        reminders.sort_by_key(|reminder| reminder.due_date);
        reminders
    }
}
