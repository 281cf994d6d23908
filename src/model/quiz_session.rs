use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::TimerState;

/// Selected option index keyed by question position. Absent means unanswered.
pub type Answers = BTreeMap<usize, usize>;

/// One attempt at the quiz. Replaced wholesale on retake, never reused.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub session_id: Uuid,
    pub current_index: usize,
    pub answers: Answers,
    pub timer_state: TimerState,
    pub completed: bool,
}

impl QuizSession {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            current_index: 0,
            answers: Answers::new(),
            timer_state: TimerState::started(started_at),
            completed: false,
        }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.timer_state.started_timestamp
    }

    pub fn answer_at(&self, position: usize) -> Option<usize> {
        self.answers.get(&position).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }
}
