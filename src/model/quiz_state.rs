use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    InProgress { position: usize },
    Completed,
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizState::NotStarted => write!(f, "not started"),
            QuizState::InProgress { position } => {
                write!(f, "in progress at position {}", position)
            }
            QuizState::Completed => write!(f, "completed"),
        }
    }
}
