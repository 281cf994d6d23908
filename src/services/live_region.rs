use log::debug;
use std::cell::RefCell;
use std::time::Duration;

use super::{Notifier, ScreenReaderAnnouncer};
use crate::model::{Notification, NotificationKind};

/// Buffers announcements until a view drains and presents them, the way a
/// polite live region is read out after the current update.
#[derive(Debug, Default)]
pub struct LiveRegion {
    pending: RefCell<Vec<String>>,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<String> {
        self.pending.borrow_mut().drain(..).collect()
    }

    pub fn last(&self) -> Option<String> {
        self.pending.borrow().last().cloned()
    }
}

impl ScreenReaderAnnouncer for LiveRegion {
    fn announce(&self, message: &str) {
        debug!(target: "a11y", "Announcing: {}", message);
        self.pending.borrow_mut().push(message.to_string());
    }
}

#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: RefCell<Vec<Notification>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Notification> {
        self.pending.borrow_mut().drain(..).collect()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, message: &str, kind: NotificationKind, duration: Duration) {
        debug!(target: "notifications", "[{}] {} ({:?})", kind, message, duration);
        self.pending.borrow_mut().push(Notification {
            message: message.to_string(),
            kind,
            duration,
        });
    }
}
