//! # Domain Module
//!
//! Business logic for the dairy herd tracker.
//!
//! Everything here is synchronous and pure over its inputs: services take
//! the herd collections and a reference date as arguments and return new
//! values, so the UI layer owns all state and no service mutates anything
//! behind the caller's back. The only exception is the scan service, which
//! keeps the single pending simulated scan in memory.
//!
//! ## Module Organization
//!
//! - **auth_service**: hardcoded credential check against the mock user list
//! - **herd_service**: cow registry search, filtering and lookups
//! - **milk_service**: daily entry form prefill, live hints and saving
//! - **reminder_service**: due-date window filtering for vaccinations and deliveries
//! - **report_service**: yield classification and the production time series
//! - **dashboard_service**: headline numbers for the dashboard screen
//! - **scan_service**: simulated QR tag scan
//! - **export_service**: JSON backup of the session data
//! - **commands**: command/query types the UI hands to services
//! - **models**: domain entities with proper date types

pub mod auth_service;
pub mod commands;
pub mod dashboard_service;
pub mod export_service;
pub mod herd_service;
pub mod milk_service;
pub mod models;
pub mod reminder_service;
pub mod report_service;
pub mod scan_service;

pub use auth_service::*;
pub use dashboard_service::*;
pub use export_service::*;
pub use herd_service::*;
pub use milk_service::*;
pub use reminder_service::*;
pub use report_service::*;
pub use scan_service::*;
