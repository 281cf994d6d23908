use super::{QuestionView, QuizResult, ResultsView};

#[derive(Debug, Clone)]
pub enum QuizEngineEvent {
    /// A session began or the position moved.
    QuestionChanged(QuestionView),
    /// The answer at the current position changed; navigation may have too.
    SelectionChanged(QuestionView),
    QuizCompleted {
        results: ResultsView,
        result: QuizResult,
    },
    ResultShared(String),
}
