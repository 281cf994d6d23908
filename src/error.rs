use thiserror::Error;

use crate::model::QuizState;

/// Failures of the key-value store capability.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stored value: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum QuizError {
    /// `select_option` got an index outside the current question's options.
    #[error("option index {index} is out of range for a question with {option_count} options")]
    InvalidOptionIndex { index: usize, option_count: usize },

    #[error("cannot {command} while the quiz is {state}")]
    InvalidStateTransition {
        command: &'static str,
        state: QuizState,
    },

    #[error("invalid question set: {0}")]
    InvalidQuestionSet(String),

    /// Never returned from an engine command; logged and dropped instead.
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] StoreError),
}

impl QuizError {
    pub fn invalid_transition(command: &'static str, state: QuizState) -> Self {
        QuizError::InvalidStateTransition { command, state }
    }
}
