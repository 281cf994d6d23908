use chrono::{DateTime, Utc};
use std::time::Duration;

/// Start and end readings of a quiz session's clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerState {
    pub started_timestamp: DateTime<Utc>,
    pub ended_timestamp: Option<DateTime<Utc>>,
}

impl TimerState {
    pub fn started(now: DateTime<Utc>) -> Self {
        Self {
            started_timestamp: now,
            ended_timestamp: None,
        }
    }

    pub fn is_ended(&self) -> bool {
        self.ended_timestamp.is_some()
    }

    /// Time between start and end, or start and `now` while running.
    /// A clock that went backwards yields zero.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        let until_time = self.ended_timestamp.unwrap_or(now);
        (until_time - self.started_timestamp)
            .to_std()
            .unwrap_or_default()
    }

    /// Elapsed time rounded to the nearest whole second, halves rounding up.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        let millis = self.elapsed(now).as_millis();
        ((millis + 500) / 1000) as u64
    }

    pub fn ended(&self, now: DateTime<Utc>) -> TimerState {
        let mut new_state = self.clone();
        new_state.ended_timestamp = Some(now);
        new_state
    }
}
