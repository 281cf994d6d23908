/// Every state-mutating request a view can make of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCommand {
    Start,
    SelectOption(usize),
    Next,
    Previous,
    Finish,
    Retake,
    Share,
}

impl QuizCommand {
    pub fn name(&self) -> &'static str {
        match self {
            QuizCommand::Start => "start",
            QuizCommand::SelectOption(_) => "select an option",
            QuizCommand::Next => "go to the next question",
            QuizCommand::Previous => "go to the previous question",
            QuizCommand::Finish => "finish",
            QuizCommand::Retake => "retake",
            QuizCommand::Share => "share",
        }
    }
}
