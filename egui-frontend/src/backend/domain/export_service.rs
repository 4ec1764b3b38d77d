//! Data backup: serialize the in-memory session data to JSON.
//!
//! The settings screen's "Backup Data" action produces a snapshot the user
//! can copy out; restore is not implemented.

use anyhow::Result;
use log::info;

use crate::backend::domain::models::cow::Cow;
use crate::backend::domain::models::milk_record::MilkRecord;
use shared::{FarmSnapshot, User};

const ISO_DATE: &str = "%Y-%m-%d";

#[derive(Clone, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Serialize users, herd and milk records to pretty-printed JSON using
    /// the wire shapes from the `shared` crate.
    pub fn export_snapshot(&self, users: &[User], cows: &[Cow], records: &[MilkRecord]) -> Result<String> {
        let snapshot = FarmSnapshot::new(
            users.to_vec(),
            cows.iter().map(Self::cow_to_dto).collect(),
            records.iter().map(Self::record_to_dto).collect(),
        );
        let json = serde_json::to_string_pretty(&snapshot)?;
        info!(
            "exported snapshot: {} users, {} cows, {} milk records ({} bytes)",
            users.len(),
            cows.len(),
            records.len(),
            json.len()
        );
        Ok(json)
    }

    fn cow_to_dto(cow: &Cow) -> shared::Cow {
        shared::Cow {
            id: cow.id.clone(),
            name: cow.name.clone(),
            tag_id: cow.tag_id.clone(),
            gender: cow.gender,
            breed: cow.breed.clone(),
            birth_date: cow.birth_date.format(ISO_DATE).to_string(),
            image_url: cow.image_url.clone(),
            health_status: cow.health_status,
            vaccinations: cow
                .vaccinations
                .iter()
                .map(|v| shared::Vaccination {
                    name: v.name.clone(),
                    date: v.date.format(ISO_DATE).to_string(),
                    next_due_date: v.next_due_date.format(ISO_DATE).to_string(),
                })
                .collect(),
            pregnancy: shared::Pregnancy {
                is_pregnant: cow.pregnancy.is_pregnant,
                due_date: cow.pregnancy.due_date.map(|d| d.format(ISO_DATE).to_string()),
                last_bred_date: cow.pregnancy.last_bred_date.map(|d| d.format(ISO_DATE).to_string()),
            },
            notes: cow.notes.clone(),
            expected_yield: cow.expected_yield,
        }
    }

    fn record_to_dto(record: &MilkRecord) -> shared::MilkRecord {
        shared::MilkRecord {
            cow_id: record.cow_id.clone(),
            date: record.date.format(ISO_DATE).to_string(),
            amount: record.amount,
        }
    }
}
