//! Domain model for a cow.
//!
//! Unlike the wire shapes in the `shared` crate, these carry proper
//! `NaiveDate` values so date arithmetic never re-parses strings.

use chrono::{Datelike, NaiveDate};
use shared::{Gender, HealthStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct Vaccination {
    pub name: String,
    pub date: NaiveDate,
    pub next_due_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pregnancy {
    pub is_pregnant: bool,
    pub due_date: Option<NaiveDate>,
    pub last_bred_date: Option<NaiveDate>,
}

impl Pregnancy {
    pub fn not_pregnant() -> Self {
        Self {
            is_pregnant: false,
            due_date: None,
            last_bred_date: None,
        }
    }

    pub fn expecting(last_bred_date: NaiveDate, due_date: NaiveDate) -> Self {
        Self {
            is_pregnant: true,
            due_date: Some(due_date),
            last_bred_date: Some(last_bred_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cow {
    pub id: String,
    pub name: String,
    pub tag_id: String,
    pub gender: Gender,
    pub breed: String,
    pub birth_date: NaiveDate,
    pub image_url: String,
    pub health_status: HealthStatus,
    /// Ordered vaccination history, oldest first.
    pub vaccinations: Vec<Vaccination>,
    pub pregnancy: Pregnancy,
    pub notes: String,
    /// Expected daily yield in liters; 0 for non-milking animals.
    pub expected_yield: f64,
}

impl Cow {
    /// The next vaccination due date: taken from the last history entry.
    /// Record-keeping appends in order, so the last entry is the current one.
    pub fn next_vaccination_due(&self) -> Option<NaiveDate> {
        self.vaccinations.last().map(|v| v.next_due_date)
    }

    /// The expected delivery date, if the cow is pregnant and one is recorded.
    pub fn delivery_due(&self) -> Option<NaiveDate> {
        if self.pregnancy.is_pregnant {
            self.pregnancy.due_date
        } else {
            None
        }
    }

    /// Whether this animal appears on the milk entry form and in per-cow reports.
    pub fn is_milking(&self) -> bool {
        self.gender == Gender::Female
    }

    /// Age in whole years at `today`, counting a year only once the birthday
    /// has passed.
    pub fn age_years(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.birth_date.year();
        if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_cow() -> Cow {
        Cow {
            id: "c1".to_string(),
            name: "Daisy".to_string(),
            tag_id: "FARM001".to_string(),
            gender: Gender::Female,
            breed: "Holstein-Friesian".to_string(),
            birth_date: date(2019, 3, 15),
            image_url: String::new(),
            health_status: HealthStatus::Healthy,
            vaccinations: vec![
                Vaccination {
                    name: "BVD".to_string(),
                    date: date(2022, 11, 1),
                    next_due_date: date(2023, 11, 1),
                },
                Vaccination {
                    name: "BVD".to_string(),
                    date: date(2023, 11, 1),
                    next_due_date: date(2024, 11, 1),
                },
            ],
            pregnancy: Pregnancy::not_pregnant(),
            notes: String::new(),
            expected_yield: 30.0,
        }
    }

    #[test]
    fn test_next_vaccination_due_uses_last_entry() {
        let cow = test_cow();
        // The last history entry wins, even if an earlier entry had a later date.
        assert_eq!(cow.next_vaccination_due(), Some(date(2024, 11, 1)));

        let mut unvaccinated = test_cow();
        unvaccinated.vaccinations.clear();
        assert_eq!(unvaccinated.next_vaccination_due(), None);
    }

    #[test]
    fn test_delivery_due_requires_pregnancy() {
        let mut cow = test_cow();
        assert_eq!(cow.delivery_due(), None);

        cow.pregnancy = Pregnancy::expecting(date(2024, 5, 10), date(2025, 2, 14));
        assert_eq!(cow.delivery_due(), Some(date(2025, 2, 14)));

        // A pregnancy flag without a recorded due date yields nothing.
        cow.pregnancy = Pregnancy {
            is_pregnant: true,
            due_date: None,
            last_bred_date: None,
        };
        assert_eq!(cow.delivery_due(), None);
    }

    #[test]
    fn test_age_years_respects_birthday() {
        let cow = test_cow(); // born 2019-03-15

        assert_eq!(cow.age_years(date(2025, 3, 14)), 5); // day before birthday
        assert_eq!(cow.age_years(date(2025, 3, 15)), 6); // on the birthday
        assert_eq!(cow.age_years(date(2025, 7, 1)), 6);
    }
}
