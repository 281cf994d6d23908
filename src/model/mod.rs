mod input_event;
mod notification;
mod performance;
mod question;
mod quiz_command;
mod quiz_engine_event;
mod quiz_result;
mod quiz_session;
mod quiz_state;
mod timer_state;
mod views;

pub use input_event::{InputEvent, Key};
pub use notification::{Notification, NotificationKind, DEFAULT_NOTIFICATION_DURATION};
pub use performance::PerformanceTier;
pub use question::{Question, QuestionSet};
pub use quiz_command::QuizCommand;
pub use quiz_engine_event::QuizEngineEvent;
pub use quiz_result::{score_percent, QuizResult};
pub use quiz_session::{Answers, QuizSession};
pub use quiz_state::QuizState;
pub use timer_state::TimerState;
pub use views::{NavigationState, QuestionBreakdown, QuestionView, ResultsView};
