use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DurationSeconds;
use std::time::Duration;
use uuid::Uuid;

use super::Answers;

/// The persisted outcome of one completed session. Immutable once built.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    session_id: Uuid,
    score: u8,
    correct_count: usize,
    total: usize,
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(rename = "timeSpent")]
    time_spent: Duration,
    #[serde(rename = "date")]
    completed_at: DateTime<Utc>,
    answers: Answers,
}

impl QuizResult {
    pub fn new(
        session_id: Uuid,
        correct_count: usize,
        total: usize,
        time_spent: Duration,
        completed_at: DateTime<Utc>,
        answers: Answers,
    ) -> Self {
        Self {
            session_id,
            score: score_percent(correct_count, total),
            correct_count,
            total,
            time_spent,
            completed_at,
            answers,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn time_spent(&self) -> Duration {
        self.time_spent
    }

    pub fn time_spent_seconds(&self) -> u64 {
        self.time_spent.as_secs()
    }

    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }
}

/// `round(100 * correct / total)` with halves rounding up, in integer arithmetic.
pub fn score_percent(correct_count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct_count = correct_count.min(total);
    ((200 * correct_count + total) / (2 * total)) as u8
}
