//! Clock port — injected time so cache freshness is testable.

use pricelist_domain::time::{self, Timestamp};

/// Provides the current time to the cache.
pub trait Clock: Send + Sync {
    /// The current UTC time.
    fn now(&self) -> Timestamp;
}

/// Production clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}

impl<T: Clock> Clock for std::sync::Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_track_system_time() {
        let clock = SystemClock;
        let before = time::now();
        let ts = clock.now();
        let after = time::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }
}
