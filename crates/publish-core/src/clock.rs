//! Injectable time source
//!
//! The manifest timestamp is captured once per publish. Tests replace the
//! wall clock with a fixed instant so the manifest digest is reproducible.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

/// A zero-argument function returning the current UTC instant.
#[derive(Clone)]
pub struct Clock(Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>);

impl Clock {
    /// Clock reading the system wall clock.
    pub fn system() -> Self {
        Self::from_fn(Utc::now)
    }

    /// Clock that always returns `instant`.
    pub fn fixed(instant: DateTime<Utc>) -> Self {
        Self::from_fn(move || instant)
    }

    pub fn from_fn(now: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        Self(Arc::new(now))
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.0)()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Clock").finish_non_exhaustive()
    }
}

/// Render an instant in the UTC string form used by the `timestamp` field,
/// e.g. `Fri, 16 Oct 2026 12:00:00 GMT`.
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_utc_matches_http_date_form() {
        let instant = Utc.with_ymd_and_hms(2026, 10, 16, 9, 5, 3).unwrap();
        assert_eq!(format_utc(instant), "Fri, 16 Oct 2026 09:05:03 GMT");
    }

    #[test]
    fn fixed_clock_is_stable() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let clock = Clock::fixed(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.clone().now(), instant);
    }
}
