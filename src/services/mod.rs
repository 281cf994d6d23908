//! Capabilities the quiz engine is constructed with. The engine never
//! reaches past these traits into any UI or storage technology.

mod clock;
mod file_store;
mod live_region;
mod memory_store;

use chrono::{DateTime, Utc};
use std::rc::Rc;
use std::time::Duration;

use crate::error::StoreError;
use crate::model::NotificationKind;

pub use clock::{ManualClock, SystemClock};
pub use file_store::JsonFileStore;
pub use live_region::{LiveRegion, NotificationQueue};
pub use memory_store::MemoryStore;

/// Shows a transient user-visible message.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind, duration: Duration);
}

/// Pushes text to an assistive-technology live region.
pub trait ScreenReaderAnnouncer {
    fn announce(&self, message: &str);
}

/// Bounded persistent storage of JSON values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError>;
    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError>;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The capability set handed to `QuizEngine::new`.
#[derive(Clone)]
pub struct QuizServices {
    pub notifier: Rc<dyn Notifier>,
    pub announcer: Rc<dyn ScreenReaderAnnouncer>,
    pub store: Rc<dyn KeyValueStore>,
    pub clock: Rc<dyn Clock>,
}

impl QuizServices {
    pub fn new(
        notifier: Rc<dyn Notifier>,
        announcer: Rc<dyn ScreenReaderAnnouncer>,
        store: Rc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            notifier,
            announcer,
            store,
            clock: Rc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
