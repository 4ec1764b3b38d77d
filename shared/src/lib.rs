//! Shared data types for the dairy herd tracker.
//!
//! These are the plain serializable shapes exchanged between the backend
//! domain layer and the UI: herd entities as delivered by the data source
//! (string dates, ISO 8601 `YYYY-MM-DD`), plus the derived read models the
//! screens consume. Business logic lives in the backend domain services,
//! not here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Staff,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Staff => write!(f, "Staff"),
        }
    }
}

/// A user of the dashboard. Authentication is a hardcoded stub, so this
/// carries no credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Health status as recorded by farm staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Sick,
    #[serde(rename = "Under Observation")]
    UnderObservation,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "Healthy"),
            HealthStatus::Sick => write!(f, "Sick"),
            HealthStatus::UnderObservation => write!(f, "Under Observation"),
        }
    }
}

/// One entry in a cow's vaccination history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vaccination {
    pub name: String,
    /// Date administered (`YYYY-MM-DD`)
    pub date: String,
    /// Next due date (`YYYY-MM-DD`)
    pub next_due_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pregnancy {
    pub is_pregnant: bool,
    /// Expected delivery date (`YYYY-MM-DD`), if pregnant
    pub due_date: Option<String>,
    pub last_bred_date: Option<String>,
}

/// A cow as supplied by the data source.
///
/// The vaccination history is an ordered sequence; "the" next due date of a
/// cow is the next-due date of the last entry, not the maximum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cow {
    pub id: String,
    pub name: String,
    pub tag_id: String,
    pub gender: Gender,
    pub breed: String,
    /// Birth date (`YYYY-MM-DD`)
    pub birth_date: String,
    pub image_url: String,
    pub health_status: HealthStatus,
    pub vaccinations: Vec<Vaccination>,
    pub pregnancy: Pregnancy,
    pub notes: String,
    /// Expected daily yield in liters (non-negative; 0 for non-milking animals)
    pub expected_yield: f64,
}

/// A single milk measurement: one cow, one calendar day, liters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilkRecord {
    pub cow_id: String,
    /// Calendar date (`YYYY-MM-DD`)
    pub date: String,
    pub amount: f64,
}

/// What a reminder is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderKind {
    Vaccination,
    Delivery,
}

impl fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReminderKind::Vaccination => write!(f, "Vaccination"),
            ReminderKind::Delivery => write!(f, "Delivery"),
        }
    }
}

/// Classification of a finalized daily record against the expected yield.
/// Strict comparison, no tolerance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YieldStatus {
    Over,
    Under,
    Meeting,
    NoRecord,
}

/// Live hint shown next to the entry field while an amount is being typed.
/// Uses a ±2 L band, unlike [`YieldStatus`] which compares strictly; the two
/// policies serve different call sites and are deliberately kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntryBadge {
    /// More than 2 L above expectation; payload is the signed difference.
    Over(f64),
    /// More than 2 L below expectation; payload is the signed difference.
    Under(f64),
    Normal,
}

/// Headline numbers for the dashboard screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_cows: usize,
    pub total_milk_today: f64,
    pub cows_milked_today: usize,
    /// Average liters per milked cow today, rounded to one decimal; 0 when
    /// nothing was recorded yet.
    pub average_yield: f64,
    pub vaccinations_due_soon: usize,
    pub deliveries_due_soon: usize,
    pub cows_under_observation: usize,
}

/// Serializable snapshot of the in-memory session data, produced by the
/// settings screen's backup action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmSnapshot {
    /// Local timestamp the snapshot was taken (RFC 3339)
    pub exported_at: String,
    pub users: Vec<User>,
    pub cows: Vec<Cow>,
    pub milk_records: Vec<MilkRecord>,
}

impl FarmSnapshot {
    pub fn new(users: Vec<User>, cows: Vec<Cow>, milk_records: Vec<MilkRecord>) -> Self {
        Self {
            exported_at: chrono::Local::now().to_rfc3339(),
            users,
            cows,
            milk_records,
        }
    }
}

impl Cow {
    /// Generate a cow ID from a timestamp.
    /// Format: "cow::<epoch_millis>"
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("cow::{}", epoch_millis)
    }

    /// Parse a cow ID to extract the timestamp.
    pub fn parse_id(id: &str) -> Result<u64, CowIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 2 || parts[0] != "cow" {
            return Err(CowIdError::InvalidFormat);
        }

        parts[1].parse::<u64>().map_err(|_| CowIdError::InvalidTimestamp)
    }

    /// Extract the timestamp from this cow's ID.
    pub fn extract_timestamp(&self) -> Result<u64, CowIdError> {
        Self::parse_id(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CowIdError {
    InvalidFormat,
    InvalidTimestamp,
}

impl fmt::Display for CowIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CowIdError::InvalidFormat => write!(f, "Invalid cow ID format"),
            CowIdError::InvalidTimestamp => write!(f, "Invalid timestamp in cow ID"),
        }
    }
}

impl std::error::Error for CowIdError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_cow_id() {
        let id = Cow::generate_id(1702516122000);
        assert_eq!(id, "cow::1702516122000");
    }

    #[test]
    fn test_parse_cow_id() {
        // Valid ID
        let timestamp = Cow::parse_id("cow::1702516122000").unwrap();
        assert_eq!(timestamp, 1702516122000);

        // Invalid format
        assert!(Cow::parse_id("invalid::format").is_err());
        assert!(Cow::parse_id("cow").is_err());
        assert!(Cow::parse_id("cow::1::2").is_err());

        // Invalid timestamp
        assert!(Cow::parse_id("cow::not_a_number").is_err());

        // Seed data uses short hand-written IDs; those are simply not
        // timestamp-backed and must fail to parse rather than panic.
        assert_eq!(Cow::parse_id("c1"), Err(CowIdError::InvalidFormat));
    }

    #[test]
    fn test_health_status_wire_format() {
        // The data source spells the observation status with a space.
        let json = serde_json::to_string(&HealthStatus::UnderObservation).unwrap();
        assert_eq!(json, "\"Under Observation\"");

        let parsed: HealthStatus = serde_json::from_str("\"Under Observation\"").unwrap();
        assert_eq!(parsed, HealthStatus::UnderObservation);

        assert_eq!(serde_json::to_string(&HealthStatus::Healthy).unwrap(), "\"Healthy\"");
    }

    #[test]
    fn test_milk_record_round_trip() {
        let record = MilkRecord {
            cow_id: "c1".to_string(),
            date: "2025-06-01".to_string(),
            amount: 31.5,
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: MilkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
