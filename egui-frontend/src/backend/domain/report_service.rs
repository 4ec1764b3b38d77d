//! Reporting: yield classification and the production time series.

use chrono::NaiveDate;
use log::debug;
use std::collections::{BTreeMap, HashMap};

use crate::backend::domain::models::cow::Cow;
use crate::backend::domain::models::milk_record::MilkRecord;
use shared::YieldStatus;

/// One bucket of the production time series, keyed by calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyProduction {
    pub date: NaiveDate,
    /// Sum over the full herd; cows without a record contribute 0.
    pub total: f64,
    /// Recorded amount per cow id, only for cows with a record this date.
    pub per_cow: HashMap<String, f64>,
}

/// Cows partitioned by how their record for one day compares to expectation.
/// Cows with no record that day appear in none of the lists.
#[derive(Debug, Clone, Default)]
pub struct DailySummary {
    pub over: Vec<Cow>,
    pub under: Vec<Cow>,
    pub meeting: Vec<Cow>,
}

#[derive(Clone, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Classify a finalized daily record against the expected yield.
    ///
    /// Strict comparison with no tolerance band; the entry form's live hint
    /// uses a separate ±2 L policy (see the milk service) and the two are
    /// intentionally not unified.
    pub fn classify(&self, expected_yield: f64, actual: Option<f64>) -> YieldStatus {
        match actual {
            None => YieldStatus::NoRecord,
            Some(amount) if amount > expected_yield => YieldStatus::Over,
            Some(amount) if amount < expected_yield => YieldStatus::Under,
            Some(_) => YieldStatus::Meeting,
        }
    }

    /// Partition the herd by performance on `date`, preserving herd order.
    pub fn daily_summary(&self, cows: &[Cow], records: &[MilkRecord], date: NaiveDate) -> DailySummary {
        let mut summary = DailySummary::default();
        for cow in cows {
            let actual = records
                .iter()
                .find(|r| r.cow_id == cow.id && r.date == date)
                .map(|r| r.amount);
            match self.classify(cow.expected_yield, actual) {
                YieldStatus::Over => summary.over.push(cow.clone()),
                YieldStatus::Under => summary.under.push(cow.clone()),
                YieldStatus::Meeting => summary.meeting.push(cow.clone()),
                YieldStatus::NoRecord => {}
            }
        }
        summary
    }

    /// Bucket records by calendar date, ascending.
    ///
    /// Within a bucket, amounts are keyed by cow id with last write winning
    /// on duplicates (the save path keeps the invariant, so duplicates only
    /// arise from a misbehaving data source). The per-date total iterates
    /// the full cow list, so a cow added after some dates contributes 0 to
    /// those days rather than leaving a gap; a record whose cow id is not in
    /// the herd stays visible in `per_cow` but is not totaled.
    pub fn aggregate(&self, records: &[MilkRecord], cows: &[Cow]) -> Vec<DailyProduction> {
        let mut buckets: BTreeMap<NaiveDate, HashMap<String, f64>> = BTreeMap::new();
        for record in records {
            buckets
                .entry(record.date)
                .or_default()
                .insert(record.cow_id.clone(), record.amount);
        }

        debug!("aggregated {} records into {} day buckets", records.len(), buckets.len());

        buckets
            .into_iter()
            .map(|(date, per_cow)| {
                let total = cows
                    .iter()
                    .map(|cow| per_cow.get(&cow.id).copied().unwrap_or(0.0))
                    .sum();
                DailyProduction { date, total, per_cow }
            })
            .collect()
    }

    /// The herd-total series for charting.
    pub fn total_series(&self, points: &[DailyProduction]) -> Vec<(NaiveDate, f64)> {
        points.iter().map(|p| (p.date, p.total)).collect()
    }

    /// One cow's series for charting: only the dates it has a record for.
    /// An unknown cow id yields an empty series, not an error.
    pub fn series_for_cow(&self, points: &[DailyProduction], cow_id: &str) -> Vec<(NaiveDate, f64)> {
        points
            .iter()
            .filter_map(|p| p.per_cow.get(cow_id).map(|amount| (p.date, *amount)))
            .collect()
    }
}
