pub mod history;
pub mod messages;
pub mod question_bank;
pub mod quiz_engine;
pub mod settings;

pub use history::{ResultHistory, HISTORY_KEY, HISTORY_LIMIT};
pub use question_bank::proclamation_quiz;
pub use quiz_engine::{count_correct, QuizEngine};
pub use settings::Settings;
