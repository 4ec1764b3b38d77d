//! Domain model for a milk record.

use chrono::NaiveDate;

/// One milk measurement: one cow, one calendar day, liters.
///
/// The aggregation logic assumes at most one record per (cow, date) pair;
/// the daily save operation maintains that invariant for the day it writes.
#[derive(Debug, Clone, PartialEq)]
pub struct MilkRecord {
    pub cow_id: String,
    pub date: NaiveDate,
    pub amount: f64,
}

impl MilkRecord {
    pub fn new(cow_id: impl Into<String>, date: NaiveDate, amount: f64) -> Self {
        Self {
            cow_id: cow_id.into(),
            date,
            amount,
        }
    }
}
