//! Notification delivery.

use crate::catalog::Suggestion;
use crate::feature::FeatureId;

/// A fired feature, ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The feature whose pattern fired.
    pub feature: FeatureId,
    /// Catalog entry for the feature, if the catalog has one.
    pub suggestion: Option<Suggestion>,
}

impl Notification {
    /// Text to display; falls back to the feature id.
    pub fn text(&self) -> &str {
        self.suggestion
            .as_ref()
            .map_or(self.feature.as_str(), |s| s.text.as_str())
    }
}

/// Receives notifications from a [`Coach`](crate::Coach).
pub trait NotificationSink {
    /// Deliver one notification.
    fn notify(&mut self, notification: Notification);
}

impl<F> NotificationSink for F
where
    F: FnMut(Notification),
{
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    notifications: Vec<Notification>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Features notified so far, in order.
    pub fn features(&self) -> Vec<FeatureId> {
        self.notifications.iter().map(|n| n.feature).collect()
    }

    /// Drain the received notifications.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

/// Writes notifications to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&mut self, notification: Notification) {
        log::info!("[{}] {}", notification.feature, notification.text());
    }
}
