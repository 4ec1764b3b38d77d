//! Simulated QR tag scan.
//!
//! There is no camera: a scan arms a fixed delay and then resolves to a
//! pseudo-randomly chosen cow. Re-triggering before resolution overwrites
//! the pending scan, so only the last trigger ever resolves. That
//! last-resolve-wins behavior is acceptable for a simulation and is kept
//! as-is; there is no cancellation path.

use log::info;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crate::backend::domain::models::cow::Cow;

/// How long a simulated scan takes to "find" a tag.
pub const SCAN_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone)]
pub struct ScanService {
    /// Instant the pending scan resolves at; `None` when idle.
    pending: Arc<Mutex<Option<Instant>>>,
}

impl ScanService {
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Arm a scan that resolves `SCAN_DELAY` after `now`. Overwrites any
    /// scan already pending.
    pub fn start_scan(&self, now: Instant) {
        info!("simulated QR scan started");
        *self.pending.lock().unwrap() = Some(now + SCAN_DELAY);
    }

    /// Whether a scan is pending and not yet resolvable.
    pub fn is_scanning(&self, now: Instant) -> bool {
        matches!(*self.pending.lock().unwrap(), Some(resolve_at) if now < resolve_at)
    }

    /// Resolve the pending scan if its delay has elapsed. Returns `None`
    /// while idle or still pending. An empty herd resolves to nothing.
    pub fn poll(&self, now: Instant, cows: &[Cow]) -> Option<Cow> {
        let mut pending = self.pending.lock().unwrap();
        match *pending {
            Some(resolve_at) if now >= resolve_at => {
                *pending = None;
                if cows.is_empty() {
                    return None;
                }
                let cow = cows[Self::pseudo_random_index(cows.len())].clone();
                info!("simulated QR scan resolved to {} ({})", cow.name, cow.tag_id);
                Some(cow)
            }
            _ => None,
        }
    }

    /// Pseudo-random pick from the system clock; good enough for a demo.
    fn pseudo_random_index(len: usize) -> usize {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        (nanos % len as u128) as usize
    }
}

impl Default for ScanService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::cow::Pregnancy;
    use chrono::NaiveDate;
    use shared::{Gender, HealthStatus};

    fn cow(id: &str) -> Cow {
        Cow {
            id: id.to_string(),
            name: format!("Cow {}", id),
            tag_id: format!("TAG-{}", id),
            gender: Gender::Female,
            breed: "Jersey".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            image_url: String::new(),
            health_status: HealthStatus::Healthy,
            vaccinations: Vec::new(),
            pregnancy: Pregnancy::not_pregnant(),
            notes: String::new(),
            expected_yield: 25.0,
        }
    }

    #[test]
    fn test_scan_resolves_after_delay() {
        let service = ScanService::new();
        let herd = vec![cow("c1"), cow("c2")];
        let start = Instant::now();

        service.start_scan(start);
        assert!(service.is_scanning(start));
        assert!(service.poll(start, &herd).is_none());

        // Still pending one millisecond before the deadline.
        let almost = start + SCAN_DELAY - Duration::from_millis(1);
        assert!(service.is_scanning(almost));
        assert!(service.poll(almost, &herd).is_none());

        let done = start + SCAN_DELAY;
        assert!(!service.is_scanning(done));
        let found = service.poll(done, &herd).expect("scan should resolve");
        assert!(herd.iter().any(|c| c.id == found.id));

        // Resolved exactly once.
        assert!(service.poll(done, &herd).is_none());
    }

    #[test]
    fn test_retrigger_overwrites_pending_scan() {
        let service = ScanService::new();
        let herd = vec![cow("c1")];
        let start = Instant::now();

        service.start_scan(start);
        let restart = start + Duration::from_millis(500);
        service.start_scan(restart);

        // The first deadline passes without resolving: the second trigger
        // replaced it, so only the last scan ever produces a result.
        let first_deadline = start + SCAN_DELAY;
        assert!(service.poll(first_deadline, &herd).is_none());
        assert!(service.is_scanning(first_deadline));

        let second_deadline = restart + SCAN_DELAY;
        assert!(service.poll(second_deadline, &herd).is_some());
    }

    #[test]
    fn test_empty_herd_resolves_to_nothing() {
        let service = ScanService::new();
        let start = Instant::now();

        service.start_scan(start);
        assert!(service.poll(start + SCAN_DELAY, &[]).is_none());
        // The pending scan is consumed either way.
        assert!(!service.is_scanning(start + SCAN_DELAY));
    }

    #[test]
    fn test_idle_poll_is_a_no_op() {
        let service = ScanService::new();
        assert!(service.poll(Instant::now(), &[cow("c1")]).is_none());
    }
}
