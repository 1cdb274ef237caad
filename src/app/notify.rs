// LandSearch - app/notify.rs
//
// Transient user notifications. Every operation boundary converts its
// outcome into one of these; success notices expire sooner than errors.

use crate::util::constants::{ERROR_NOTICE_MS, MAX_NOTIFICATIONS, SUCCESS_NOTICE_MS};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// How long a notice of this kind stays visible.
    pub fn lifetime(self) -> Duration {
        match self {
            NoticeKind::Success => Duration::from_millis(SUCCESS_NOTICE_MS),
            NoticeKind::Error => Duration::from_millis(ERROR_NOTICE_MS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NoticeKind,
    pub message: String,
    pub expires_at: Instant,
}

/// Bounded queue of live notifications, oldest first.
#[derive(Debug, Default)]
pub struct Notifications {
    items: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.push(NoticeKind::Success, message.into(), now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.push(NoticeKind::Error, message.into(), now);
    }

    fn push(&mut self, kind: NoticeKind, message: String, now: Instant) {
        if self.items.len() >= MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
        self.items.push_back(Notification {
            kind,
            message,
            expires_at: now + kind.lifetime(),
        });
    }

    /// Drop every notice whose lifetime has elapsed.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| n.expires_at > now);
    }

    /// Remove a single notice (the user dismissed it).
    pub fn dismiss(&mut self, index: usize) {
        self.items.remove(index);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Earliest expiry among live notices, for scheduling the next repaint.
    pub fn next_expiry(&self) -> Option<Instant> {
        self.items.iter().map(|n| n.expires_at).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_expires_before_error() {
        let now = Instant::now();
        let mut notes = Notifications::new();
        notes.success("ok", now);
        notes.error("bad", now);

        notes.prune(now + Duration::from_millis(SUCCESS_NOTICE_MS));
        let kinds: Vec<_> = notes.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NoticeKind::Error]);

        notes.prune(now + Duration::from_millis(ERROR_NOTICE_MS));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_queue_is_bounded() {
        let now = Instant::now();
        let mut notes = Notifications::new();
        for i in 0..MAX_NOTIFICATIONS + 3 {
            notes.success(format!("n{i}"), now);
        }
        assert_eq!(notes.len(), MAX_NOTIFICATIONS);
        assert_eq!(notes.iter().next().unwrap().message, "n3");
    }

    #[test]
    fn test_next_expiry_and_dismiss() {
        let now = Instant::now();
        let mut notes = Notifications::new();
        assert_eq!(notes.next_expiry(), None);
        notes.error("bad", now);
        notes.success("ok", now);
        assert_eq!(notes.next_expiry(), Some(now + NoticeKind::Success.lifetime()));
        notes.dismiss(1);
        assert_eq!(notes.next_expiry(), Some(now + NoticeKind::Error.lifetime()));
    }
}
