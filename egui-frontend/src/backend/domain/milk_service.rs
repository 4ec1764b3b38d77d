//! Daily milk entry: form prefill, live entry hints and the save operation.

use chrono::NaiveDate;
use log::{debug, info};
use std::collections::HashMap;

use crate::backend::domain::commands::milk::{SaveDailyRecordsCommand, SaveDailyRecordsResult};
use crate::backend::domain::models::cow::Cow;
use crate::backend::domain::models::milk_record::MilkRecord;
use shared::EntryBadge;

/// Deviation band for the live entry hint, in liters. Finalized records are
/// classified strictly by the report service instead; both policies are kept.
pub const ENTRY_BAND_LITERS: f64 = 2.0;

#[derive(Clone, Default)]
pub struct MilkService;

impl MilkService {
    pub fn new() -> Self {
        Self
    }

    /// Save one day's entry form with full-day replace semantics.
    ///
    /// Every existing record for the day is removed first; a cow previously
    /// recorded that day but absent from the form, or submitting an invalid
    /// amount, loses its record. Entries that fail to parse or are negative
    /// are skipped silently; zero is a valid recorded amount. The returned
    /// list carries no ordering guarantee (consumers re-sort by date).
    pub fn save_daily_records(&self, existing: &[MilkRecord], command: SaveDailyRecordsCommand) -> SaveDailyRecordsResult {
        let mut records: Vec<MilkRecord> = existing
            .iter()
            .filter(|record| record.date != command.date)
            .cloned()
            .collect();
        let replaced = existing.len() - records.len();

        let mut saved_count = 0;
        for (cow_id, amount_text) in &command.entries {
            match Self::parse_amount(amount_text) {
                Some(amount) => {
                    records.push(MilkRecord::new(cow_id.clone(), command.date, amount));
                    saved_count += 1;
                }
                None => {
                    if !amount_text.trim().is_empty() {
                        debug!("skipping invalid amount '{}' for cow {}", amount_text, cow_id);
                    }
                }
            }
        }

        info!(
            "saved {} milk records for {} (replaced {} existing)",
            saved_count, command.date, replaced
        );

        SaveDailyRecordsResult {
            records,
            saved_count,
            success_message: "Milk records saved successfully!".to_string(),
        }
    }

    /// Prefill the entry form for `date`: each milking cow mapped to its
    /// existing amount rendered back to text, or an empty field.
    pub fn initial_entries(&self, cows: &[Cow], records: &[MilkRecord], date: NaiveDate) -> HashMap<String, String> {
        cows.iter()
            .filter(|cow| cow.is_milking())
            .map(|cow| {
                let existing = records
                    .iter()
                    .find(|record| record.cow_id == cow.id && record.date == date);
                let text = existing.map(|record| record.amount.to_string()).unwrap_or_default();
                (cow.id.clone(), text)
            })
            .collect()
    }

    /// Live hint shown while an amount is being typed: ±2 L band around the
    /// expected yield. Unparseable input shows no hint.
    pub fn entry_badge(&self, expected_yield: f64, amount_text: &str) -> Option<EntryBadge> {
        let amount: f64 = amount_text.trim().parse().ok()?;
        if !amount.is_finite() {
            return None;
        }

        let diff = amount - expected_yield;
        Some(if diff > ENTRY_BAND_LITERS {
            EntryBadge::Over(diff)
        } else if diff < -ENTRY_BAND_LITERS {
            EntryBadge::Under(diff)
        } else {
            EntryBadge::Normal
        })
    }

    fn parse_amount(text: &str) -> Option<f64> {
        let amount: f64 = text.trim().parse().ok()?;
        if amount.is_finite() && amount >= 0.0 {
            Some(amount)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::cow::Pregnancy;
    use shared::{Gender, HealthStatus};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entries(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect()
    }

    fn cow(id: &str, gender: Gender, expected_yield: f64) -> Cow {
        Cow {
            id: id.to_string(),
            name: format!("Cow {}", id),
            tag_id: format!("TAG-{}", id),
            gender,
            breed: "Jersey".to_string(),
            birth_date: date(2020, 1, 1),
            image_url: String::new(),
            health_status: HealthStatus::Healthy,
            vaccinations: Vec::new(),
            pregnancy: Pregnancy::not_pregnant(),
            notes: String::new(),
            expected_yield,
        }
    }

    #[test]
    fn test_full_day_replace_drops_absent_cows() {
        let service = MilkService::new();
        let day = date(2024, 1, 1);
        let existing = vec![
            MilkRecord::new("c1", day, 10.0),
            MilkRecord::new("c2", day, 12.0),
        ];

        // c2 submitted an empty field: its previous record for the day is
        // gone because the whole day is replaced, not merged per cow.
        let result = service.save_daily_records(
            &existing,
            SaveDailyRecordsCommand {
                date: day,
                entries: entries(&[("c1", "15"), ("c2", "")]),
            },
        );

        assert_eq!(result.saved_count, 1);
        assert_eq!(result.records, vec![MilkRecord::new("c1", day, 15.0)]);
    }

    #[test]
    fn test_records_for_other_days_survive() {
        let service = MilkService::new();
        let yesterday = date(2024, 1, 1);
        let today = date(2024, 1, 2);
        let existing = vec![MilkRecord::new("c1", yesterday, 10.0)];

        let result = service.save_daily_records(
            &existing,
            SaveDailyRecordsCommand {
                date: today,
                entries: entries(&[("c1", "11")]),
            },
        );

        assert_eq!(result.records.len(), 2);
        assert!(result.records.contains(&MilkRecord::new("c1", yesterday, 10.0)));
        assert!(result.records.contains(&MilkRecord::new("c1", today, 11.0)));
    }

    #[test]
    fn test_negative_and_malformed_amounts_are_skipped() {
        let service = MilkService::new();
        let day = date(2024, 1, 1);

        let result = service.save_daily_records(
            &[],
            SaveDailyRecordsCommand {
                date: day,
                entries: entries(&[("c1", "-5"), ("c2", "abc"), ("c3", "NaN"), ("c4", " 7.5 ")]),
            },
        );

        assert_eq!(result.saved_count, 1);
        assert_eq!(result.records, vec![MilkRecord::new("c4", day, 7.5)]);
    }

    #[test]
    fn test_zero_is_a_valid_amount() {
        let service = MilkService::new();
        let day = date(2024, 1, 1);

        let result = service.save_daily_records(
            &[],
            SaveDailyRecordsCommand {
                date: day,
                entries: entries(&[("c1", "0")]),
            },
        );

        assert_eq!(result.records, vec![MilkRecord::new("c1", day, 0.0)]);
    }

    #[test]
    fn test_initial_entries_prefills_existing_amounts() {
        let service = MilkService::new();
        let day = date(2024, 1, 1);
        let cows = vec![
            cow("c1", Gender::Female, 30.0),
            cow("c2", Gender::Female, 25.0),
            cow("c3", Gender::Male, 0.0), // bulls are not on the form
        ];
        let records = vec![MilkRecord::new("c1", day, 31.0)];

        let prefill = service.initial_entries(&cows, &records, day);
        assert_eq!(prefill.len(), 2);
        assert_eq!(prefill.get("c1").map(String::as_str), Some("31"));
        assert_eq!(prefill.get("c2").map(String::as_str), Some(""));
        assert!(!prefill.contains_key("c3"));
    }

    #[test]
    fn test_entry_badge_band() {
        let service = MilkService::new();

        assert_eq!(service.entry_badge(30.0, "33"), Some(EntryBadge::Over(3.0)));
        assert_eq!(service.entry_badge(30.0, "27"), Some(EntryBadge::Under(-3.0)));
        assert_eq!(service.entry_badge(30.0, "31.5"), Some(EntryBadge::Normal));
        assert_eq!(service.entry_badge(30.0, "28.5"), Some(EntryBadge::Normal));
        assert_eq!(service.entry_badge(30.0, "not a number"), None);
        assert_eq!(service.entry_badge(30.0, ""), None);
    }

    #[test]
    fn test_two_deviation_policies_diverge() {
        // A 1.5 L overshoot reads as "Normal" while typing but classifies as
        // "Over" once finalized. Both behaviors are load-bearing.
        let milk = MilkService::new();
        let reports = crate::backend::domain::report_service::ReportService::new();

        assert_eq!(milk.entry_badge(30.0, "31.5"), Some(EntryBadge::Normal));
        assert_eq!(reports.classify(30.0, Some(31.5)), shared::YieldStatus::Over);
    }
}
