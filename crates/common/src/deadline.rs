//! Per-stage deadlines for I/O-bound calls
//!
//! Every outbound call in this system (upstream fetch, storage write,
//! client request) is bounded by its own [`Deadline`], derived from the
//! moment the stage begins. Deadlines are never shared between stages and
//! never cumulative: the persistence stage gets a fresh budget regardless
//! of how much of the fetch budget was spent.

use std::time::{Duration, Instant};

/// A point in time after which an in-flight operation is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Create a deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now() + timeout,
        }
    }

    /// Time left until the deadline, or `None` if it has already passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.at.checked_duration_since(Instant::now())
    }

    /// Whether the deadline has already passed.
    ///
    /// This is the non-blocking check the storage layer performs before
    /// attempting a write.
    pub fn is_elapsed(&self) -> bool {
        self.remaining().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deadline_has_time_remaining() {
        let deadline = Deadline::after(Duration::from_secs(60));
        assert!(!deadline.is_elapsed());
        let remaining = deadline.remaining().expect("should have time left");
        assert!(remaining <= Duration::from_secs(60));
        assert!(remaining > Duration::from_secs(59));
    }

    #[test]
    fn zero_timeout_is_elapsed() {
        let deadline = Deadline::after(Duration::ZERO);
        assert!(deadline.is_elapsed());
        assert_eq!(deadline.remaining(), None);
    }

    #[test]
    fn deadline_eventually_elapses() {
        let deadline = Deadline::after(Duration::from_millis(5));
        std::thread::sleep(Duration::from_millis(10));
        assert!(deadline.is_elapsed());
    }

    #[test]
    fn stages_get_independent_budgets() {
        let first = Deadline::after(Duration::ZERO);
        let second = Deadline::after(Duration::from_secs(1));
        assert!(first.is_elapsed());
        assert!(!second.is_elapsed());
    }
}
