//! Client-side submission gate
//!
//! Enforces a minimum spacing between user-triggered requests. The state is
//! a plain value owned by the session instance rather than a process-wide
//! singleton, so each session gets its own window and the orchestrator stays
//! testable and reentrant per session.

use std::time::{Duration, Instant};

/// Minimum spacing between submissions
pub const MIN_INTERVAL: Duration = Duration::from_millis(2000);

/// Gate enforcing a minimum interval between submissions
///
/// The caller passes the clock value, which keeps the check synchronous and
/// lets tests drive the window without sleeping. `None` means no prior
/// request.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Gate a submission at `now`.
    ///
    /// Allowing records `now` as the new window start. A denial reports the
    /// remaining wait and leaves the window untouched, so a denied request
    /// does not reset it.
    pub fn check_and_record(&mut self, now: Instant) -> Result<(), Duration> {
        if let Some(last) = self.last_request {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < self.min_interval {
                return Err(self.min_interval - elapsed);
            }
        }
        self.last_request = Some(now);
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MIN_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_request_allowed() {
        let mut limiter = RateLimiter::default();
        assert!(limiter.check_and_record(Instant::now()).is_ok());
    }

    #[test]
    fn test_denies_within_interval_with_remaining_wait() {
        let mut limiter = RateLimiter::default();
        let start = Instant::now();
        limiter.check_and_record(start).unwrap();

        let wait = limiter
            .check_and_record(start + Duration::from_millis(500))
            .unwrap_err();
        assert_eq!(wait, Duration::from_millis(1500));
    }

    #[test]
    fn test_allows_at_interval_boundary() {
        let mut limiter = RateLimiter::default();
        let start = Instant::now();
        limiter.check_and_record(start).unwrap();

        assert!(limiter
            .check_and_record(start + Duration::from_millis(2000))
            .is_ok());
    }

    #[test]
    fn test_denied_request_does_not_reset_window() {
        let mut limiter = RateLimiter::default();
        let start = Instant::now();
        limiter.check_and_record(start).unwrap();

        // Denied at +1900ms; the window still opens at +2000ms from the
        // original allow, not from the denial.
        assert!(limiter
            .check_and_record(start + Duration::from_millis(1900))
            .is_err());
        assert!(limiter
            .check_and_record(start + Duration::from_millis(2000))
            .is_ok());
    }

    #[test]
    fn test_allow_records_new_window_start() {
        let mut limiter = RateLimiter::default();
        let start = Instant::now();
        limiter.check_and_record(start).unwrap();
        limiter
            .check_and_record(start + Duration::from_millis(2500))
            .unwrap();

        // The second allow moved the window start to +2500ms
        let wait = limiter
            .check_and_record(start + Duration::from_millis(3000))
            .unwrap_err();
        assert_eq!(wait, Duration::from_millis(1500));
    }

    #[test]
    fn test_custom_interval() {
        let mut limiter = RateLimiter::new(Duration::from_millis(100));
        let start = Instant::now();
        limiter.check_and_record(start).unwrap();
        assert!(limiter
            .check_and_record(start + Duration::from_millis(50))
            .is_err());
        assert!(limiter
            .check_and_record(start + Duration::from_millis(150))
            .is_ok());
    }
}
