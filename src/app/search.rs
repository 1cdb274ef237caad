// LandSearch - app/search.rs
//
// Delayed search scheduling. A submitted search waits a fixed latency
// before the filter runs. The wait never blocks the UI thread: the
// scheduler only records a due time, and the event loop polls it each frame
// (requesting a repaint at the due time).
//
// Cancellation: `cancel()` drops the pending request; scheduling again
// replaces it, so only the most recent submission ever runs.

use crate::core::filter::Criteria;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct PendingSearch {
    criteria: Criteria,
    due: Instant,
}

#[derive(Debug)]
pub struct SearchScheduler {
    delay: Duration,
    pending: Option<PendingSearch>,
}

impl SearchScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Queue `criteria` to run once the delay has elapsed from `now`.
    /// Any earlier pending search is replaced. Returns the due time.
    pub fn schedule(&mut self, criteria: Criteria, now: Instant) -> Instant {
        let due = now + self.delay;
        if self.pending.is_some() {
            tracing::debug!("Replacing pending search");
        }
        self.pending = Some(PendingSearch { criteria, due });
        due
    }

    /// Drop the pending search, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Hand back the criteria once due; `None` while still waiting or idle.
    pub fn poll(&mut self, now: Instant) -> Option<Criteria> {
        let due = self.due_at()?;
        if now < due {
            return None;
        }
        self.pending.take().map(|p| p.criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(taluka: &str) -> Criteria {
        Criteria {
            taluka: taluka.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_poll_waits_for_delay() {
        let now = Instant::now();
        let mut scheduler = SearchScheduler::new(Duration::from_millis(1000));
        let due = scheduler.schedule(criteria("A"), now);
        assert_eq!(due, now + Duration::from_millis(1000));

        assert!(scheduler.poll(now + Duration::from_millis(999)).is_none());
        assert!(scheduler.is_pending());
        assert_eq!(scheduler.poll(due), Some(criteria("A")));
        assert!(!scheduler.is_pending());
        assert!(scheduler.poll(due).is_none());
    }

    #[test]
    fn test_cancel_drops_pending() {
        let now = Instant::now();
        let mut scheduler = SearchScheduler::new(Duration::from_millis(10));
        scheduler.schedule(criteria("A"), now);
        assert!(scheduler.cancel());
        assert!(!scheduler.cancel());
        assert!(scheduler.poll(now + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn test_reschedule_replaces_previous() {
        let now = Instant::now();
        let mut scheduler = SearchScheduler::new(Duration::from_millis(100));
        scheduler.schedule(criteria("A"), now);
        let later = now + Duration::from_millis(50);
        scheduler.schedule(criteria("B"), later);

        assert!(scheduler.poll(now + Duration::from_millis(100)).is_none());
        assert_eq!(
            scheduler.poll(later + Duration::from_millis(100)),
            Some(criteria("B"))
        );
    }

    #[test]
    fn test_zero_delay_is_due_immediately() {
        let now = Instant::now();
        let mut scheduler = SearchScheduler::new(Duration::ZERO);
        scheduler.schedule(criteria("A"), now);
        assert_eq!(scheduler.poll(now), Some(criteria("A")));
    }
}
