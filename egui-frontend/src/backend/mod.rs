//! # Backend Module
//!
//! Embedded synchronous backend for the egui frontend: domain services plus
//! the mock data source. There is no IO layer; all collections live in
//! memory, owned by the application state, and are discarded on exit.

pub mod data;
pub mod domain;

use domain::auth_service::AuthService;
use domain::dashboard_service::DashboardService;
use domain::export_service::ExportService;
use domain::herd_service::HerdService;
use domain::milk_service::MilkService;
use domain::reminder_service::ReminderService;
use domain::report_service::ReportService;
use domain::scan_service::ScanService;

/// Main backend struct that groups all services.
pub struct Backend {
    pub auth_service: AuthService,
    pub herd_service: HerdService,
    pub milk_service: MilkService,
    pub reminder_service: ReminderService,
    pub report_service: ReportService,
    pub dashboard_service: DashboardService,
    pub scan_service: ScanService,
    pub export_service: ExportService,
}

impl Backend {
    pub fn new() -> Self {
        Backend {
            auth_service: AuthService::new(),
            herd_service: HerdService::new(),
            milk_service: MilkService::new(),
            reminder_service: ReminderService::new(),
            report_service: ReportService::new(),
            dashboard_service: DashboardService::new(),
            scan_service: ScanService::new(),
            export_service: ExportService::new(),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}
