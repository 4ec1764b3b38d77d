//! Headline numbers for the dashboard screen.

use chrono::NaiveDate;
use log::debug;
use std::collections::HashSet;

use crate::backend::domain::models::cow::Cow;
use crate::backend::domain::models::milk_record::MilkRecord;
use shared::{DashboardSummary, HealthStatus};

/// Window for the dashboard's "due soon" counters, in days.
///
/// The dashboard counts only strictly-future items and uses 30 days for both
/// vaccinations and deliveries; the reminders screen includes overdue items
/// and gives deliveries 60 days. The two screens answer different questions,
/// so the windows differ.
pub const DUE_SOON_DAYS: i64 = 30;

#[derive(Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    pub fn summary(&self, cows: &[Cow], records: &[MilkRecord], today: NaiveDate) -> DashboardSummary {
        // Zero-amount records exist (a dry day is worth recording) but do not
        // count as milking activity for the headline numbers.
        let todays: Vec<&MilkRecord> = records
            .iter()
            .filter(|record| record.date == today && record.amount > 0.0)
            .collect();

        let total_milk_today: f64 = todays.iter().map(|record| record.amount).sum();
        let cows_milked_today = todays
            .iter()
            .map(|record| record.cow_id.as_str())
            .collect::<HashSet<_>>()
            .len();
        let average_yield = if cows_milked_today > 0 {
            (total_milk_today / cows_milked_today as f64 * 10.0).round() / 10.0
        } else {
            0.0
        };

        let vaccinations_due_soon = cows
            .iter()
            .filter(|cow| Self::due_soon(cow.next_vaccination_due(), today))
            .count();
        let deliveries_due_soon = cows
            .iter()
            .filter(|cow| Self::due_soon(cow.delivery_due(), today))
            .count();
        let cows_under_observation = cows
            .iter()
            .filter(|cow| cow.health_status == HealthStatus::UnderObservation)
            .count();

        debug!(
            "dashboard: {} L from {} cows today, {} vaccinations and {} deliveries due soon",
            total_milk_today, cows_milked_today, vaccinations_due_soon, deliveries_due_soon
        );

        DashboardSummary {
            total_cows: cows.len(),
            total_milk_today,
            cows_milked_today,
            average_yield,
            vaccinations_due_soon,
            deliveries_due_soon,
            cows_under_observation,
        }
    }

    /// Strictly future and inside the window; overdue items are not teased here.
    fn due_soon(due: Option<NaiveDate>, today: NaiveDate) -> bool {
        match due {
            Some(due_date) => {
                let days = (due_date - today).num_days();
                days > 0 && days < DUE_SOON_DAYS
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::cow::{Pregnancy, Vaccination};
    use chrono::Duration;
    use shared::Gender;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn cow(id: &str) -> Cow {
        Cow {
            id: id.to_string(),
            name: format!("Cow {}", id),
            tag_id: format!("TAG-{}", id),
            gender: Gender::Female,
            breed: "Jersey".to_string(),
            birth_date: date(2020, 1, 1),
            image_url: String::new(),
            health_status: HealthStatus::Healthy,
            vaccinations: Vec::new(),
            pregnancy: Pregnancy::not_pregnant(),
            notes: String::new(),
            expected_yield: 25.0,
        }
    }

    fn vaccinated(id: &str, due: NaiveDate) -> Cow {
        let mut c = cow(id);
        c.vaccinations.push(Vaccination {
            name: "BVD".to_string(),
            date: due - Duration::days(365),
            next_due_date: due,
        });
        c
    }

    #[test]
    fn test_milk_totals_and_average() {
        let service = DashboardService::new();
        let today = date(2025, 6, 15);
        let cows = vec![cow("c1"), cow("c2"), cow("c3")];
        let records = vec![
            MilkRecord::new("c1", today, 30.0),
            MilkRecord::new("c2", today, 24.0),
            MilkRecord::new("c3", today, 0.0),                       // dry day, not counted
            MilkRecord::new("c1", today - Duration::days(1), 99.0), // yesterday
        ];

        let summary = service.summary(&cows, &records, today);
        assert_eq!(summary.total_cows, 3);
        assert_eq!(summary.total_milk_today, 54.0);
        assert_eq!(summary.cows_milked_today, 2);
        assert_eq!(summary.average_yield, 27.0);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let service = DashboardService::new();
        let today = date(2025, 6, 15);
        let cows = vec![cow("c1"), cow("c2"), cow("c3")];
        let records = vec![
            MilkRecord::new("c1", today, 10.0),
            MilkRecord::new("c2", today, 10.0),
            MilkRecord::new("c3", today, 11.0),
        ];

        let summary = service.summary(&cows, &records, today);
        assert_eq!(summary.average_yield, 10.3);
    }

    #[test]
    fn test_empty_day_has_zero_average() {
        let service = DashboardService::new();
        let summary = service.summary(&[cow("c1")], &[], date(2025, 6, 15));
        assert_eq!(summary.total_milk_today, 0.0);
        assert_eq!(summary.cows_milked_today, 0);
        assert_eq!(summary.average_yield, 0.0);
    }

    #[test]
    fn test_due_soon_excludes_overdue_and_far_future() {
        let service = DashboardService::new();
        let today = date(2025, 6, 15);
        let cows = vec![
            vaccinated("c1", today + Duration::days(10)), // counted
            vaccinated("c2", today - Duration::days(3)),  // overdue: not teased here
            vaccinated("c3", today + Duration::days(45)), // too far out
            vaccinated("c4", today),                      // due today is not strictly future
            cow("c5"),                                    // no history
        ];

        let summary = service.summary(&cows, &[], today);
        assert_eq!(summary.vaccinations_due_soon, 1);
    }

    #[test]
    fn test_deliveries_due_soon_uses_30_days_here() {
        let service = DashboardService::new();
        let today = date(2025, 6, 15);

        let mut near = cow("c1");
        near.pregnancy = Pregnancy::expecting(today - Duration::days(260), today + Duration::days(20));
        let mut far = cow("c2");
        far.pregnancy = Pregnancy::expecting(today - Duration::days(240), today + Duration::days(45));

        // The 45-day pregnancy shows on the reminders screen (60-day window)
        // but not in the dashboard teaser.
        let summary = service.summary(&[near, far], &[], today);
        assert_eq!(summary.deliveries_due_soon, 1);
    }

    #[test]
    fn test_under_observation_count() {
        let service = DashboardService::new();
        let mut watched = cow("c1");
        watched.health_status = HealthStatus::UnderObservation;

        let summary = service.summary(&[watched, cow("c2")], &[], date(2025, 6, 15));
        assert_eq!(summary.cows_under_observation, 1);
    }
}
