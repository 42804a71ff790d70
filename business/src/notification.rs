//! Transient toast notifications.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// How long a notification stays visible unless configured otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A single toast. The widget shows at most one; a new one replaces the old.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, shown_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    /// Whether the toast has been on screen for at least `duration`.
    pub fn is_expired(&self, now: DateTime<Utc>, duration: Duration) -> bool {
        let lifetime = TimeDelta::from_std(duration).unwrap_or(TimeDelta::MAX);
        now.signed_duration_since(self.shown_at) >= lifetime
    }

    /// Time left before the toast expires, zero once expired.
    pub fn remaining(&self, now: DateTime<Utc>, duration: Duration) -> Duration {
        let elapsed = now
            .signed_duration_since(self.shown_at)
            .to_std()
            .unwrap_or(Duration::ZERO);
        duration.saturating_sub(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_after_duration() {
        let shown = Utc::now();
        let toast = Notification::new("hi", NotificationKind::Success, shown);

        assert!(!toast.is_expired(shown, DEFAULT_TOAST_DURATION));
        assert!(!toast.is_expired(shown + TimeDelta::milliseconds(2999), DEFAULT_TOAST_DURATION));
        assert!(toast.is_expired(shown + TimeDelta::seconds(3), DEFAULT_TOAST_DURATION));
    }

    #[test]
    fn test_remaining_saturates() {
        let shown = Utc::now();
        let toast = Notification::new("oops", NotificationKind::Error, shown);

        assert_eq!(
            toast.remaining(shown + TimeDelta::seconds(1), DEFAULT_TOAST_DURATION),
            Duration::from_secs(2)
        );
        assert_eq!(
            toast.remaining(shown + TimeDelta::seconds(10), DEFAULT_TOAST_DURATION),
            Duration::ZERO
        );
        assert!(toast.is_error());
    }
}
