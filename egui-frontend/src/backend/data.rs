//! Mock data source.
//!
//! There is no persistence layer: this module supplies the initial users,
//! herd and milk records at startup, positioned relative to the load date so
//! the dashboard and reports always have something recent to show.

use chrono::{Duration, NaiveDate};
use log::info;

use crate::backend::domain::models::cow::{Cow, Pregnancy, Vaccination};
use crate::backend::domain::models::milk_record::MilkRecord;
use shared::{Gender, HealthStatus, Role, User};

pub struct SeedData {
    pub users: Vec<User>,
    pub cows: Vec<Cow>,
    pub milk_records: Vec<MilkRecord>,
}

/// Build the demo dataset. Milk records cover `today` and the two days
/// before it; anything that would land in the future is dropped.
pub fn load(today: NaiveDate) -> SeedData {
    let users = seed_users();
    let cows = seed_cows();
    let milk_records = seed_milk_records(today);

    info!(
        "loaded seed data: {} users, {} cows, {} milk records",
        users.len(),
        cows.len(),
        milk_records.len()
    );

    SeedData {
        users,
        cows,
        milk_records,
    }
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@farm.com".to_string(),
            role: Role::Admin,
        },
        User {
            id: "u2".to_string(),
            name: "Staff User".to_string(),
            email: "staff@farm.com".to_string(),
            role: Role::Staff,
        },
    ]
}

fn seed_cows() -> Vec<Cow> {
    vec![
        Cow {
            id: "c1".to_string(),
            name: "Daisy".to_string(),
            tag_id: "FARM001".to_string(),
            gender: Gender::Female,
            breed: "Holstein-Friesian".to_string(),
            birth_date: date(2019, 3, 15),
            image_url: "https://picsum.photos/seed/daisy/400/300".to_string(),
            health_status: HealthStatus::Healthy,
            vaccinations: vec![Vaccination {
                name: "BVD".to_string(),
                date: date(2023, 11, 1),
                next_due_date: date(2024, 11, 1),
            }],
            pregnancy: Pregnancy::expecting(date(2024, 5, 10), date(2025, 2, 14)),
            notes: "High milk producer. Prefers grazing in the west pasture.".to_string(),
            expected_yield: 30.0,
        },
        Cow {
            id: "c2".to_string(),
            name: "Bessie".to_string(),
            tag_id: "FARM002".to_string(),
            gender: Gender::Female,
            breed: "Jersey".to_string(),
            birth_date: date(2020, 7, 22),
            image_url: "https://picsum.photos/seed/bessie/400/300".to_string(),
            health_status: HealthStatus::Healthy,
            vaccinations: vec![Vaccination {
                name: "IBR".to_string(),
                date: date(2024, 1, 15),
                next_due_date: date(2025, 1, 15),
            }],
            pregnancy: Pregnancy::not_pregnant(),
            notes: "Calm temperament. Responds well to automated milking.".to_string(),
            expected_yield: 25.0,
        },
        Cow {
            id: "c3".to_string(),
            name: "Buttercup".to_string(),
            tag_id: "FARM003".to_string(),
            gender: Gender::Female,
            breed: "Guernsey".to_string(),
            birth_date: date(2018, 5, 30),
            image_url: "https://picsum.photos/seed/buttercup/400/300".to_string(),
            health_status: HealthStatus::UnderObservation,
            vaccinations: vec![Vaccination {
                name: "BVD".to_string(),
                date: date(2023, 10, 20),
                next_due_date: date(2024, 10, 20),
            }],
            pregnancy: Pregnancy::expecting(date(2024, 6, 1), date(2025, 3, 8)),
            notes: "Slight limp on front left leg noted this morning.".to_string(),
            expected_yield: 28.0,
        },
        Cow {
            id: "c4".to_string(),
            name: "Spike".to_string(),
            tag_id: "FARM004".to_string(),
            gender: Gender::Male,
            breed: "Angus".to_string(),
            birth_date: date(2021, 1, 10),
            image_url: "https://picsum.photos/seed/spike/400/300".to_string(),
            health_status: HealthStatus::Healthy,
            vaccinations: vec![Vaccination {
                name: "Clostridial".to_string(),
                date: date(2024, 3, 1),
                next_due_date: date(2025, 3, 1),
            }],
            pregnancy: Pregnancy::not_pregnant(),
            notes: "Breeding bull.".to_string(),
            expected_yield: 0.0,
        },
        Cow {
            id: "c5".to_string(),
            name: "Lily".to_string(),
            tag_id: "FARM005".to_string(),
            gender: Gender::Female,
            breed: "Ayrshire".to_string(),
            birth_date: date(2021, 11, 5),
            image_url: "https://picsum.photos/seed/lily/400/300".to_string(),
            health_status: HealthStatus::Healthy,
            vaccinations: vec![Vaccination {
                name: "BVD".to_string(),
                date: date(2024, 2, 10),
                next_due_date: date(2025, 2, 10),
            }],
            pregnancy: Pregnancy::not_pregnant(),
            notes: "First-time mother, very protective of her calf.".to_string(),
            expected_yield: 22.0,
        },
    ]
}

fn seed_milk_records(today: NaiveDate) -> Vec<MilkRecord> {
    let yesterday = today - Duration::days(1);
    let two_days_ago = today - Duration::days(2);

    let records = vec![
        // Today's records
        MilkRecord::new("c1", today, 31.0),
        MilkRecord::new("c2", today, 24.0),
        MilkRecord::new("c3", today, 26.0),
        MilkRecord::new("c5", today, 23.0),
        // Yesterday's records
        MilkRecord::new("c1", yesterday, 30.0),
        MilkRecord::new("c2", yesterday, 25.0),
        MilkRecord::new("c3", yesterday, 28.0),
        MilkRecord::new("c5", yesterday, 22.0),
        // Two days ago
        MilkRecord::new("c1", two_days_ago, 32.0),
        MilkRecord::new("c2", two_days_ago, 26.0),
        MilkRecord::new("c3", two_days_ago, 27.0),
        MilkRecord::new("c5", two_days_ago, 21.0),
    ];

    // Ensure no future dates
    records.into_iter().filter(|record| record.date <= today).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}
