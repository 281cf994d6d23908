use log::trace;

use crate::model::{InputEvent, Key, QuestionView, QuizCommand, QuizState};

/// What the terminal loop should do in response to one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Command(QuizCommand),
    ShowHistory,
    Quit,
}

/// Maps a line typed at the prompt to a key press.
pub fn parse_line(line: &str) -> Option<InputEvent> {
    let trimmed = line.trim();
    let key = match trimmed.to_lowercase().as_str() {
        "" => Key::Enter,
        "<" | "left" | "p" => Key::ArrowLeft,
        ">" | "right" | "n" => Key::ArrowRight,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => match c.to_digit(10) {
                    Some(digit) => Key::Digit(digit as u8),
                    None => Key::Char(c),
                },
                _ => return None,
            }
        }
    };
    Some(InputEvent::KeyPressed(key))
}

pub struct InputTranslator;

impl InputTranslator {
    pub fn translate(
        event: &InputEvent,
        state: QuizState,
        view: Option<&QuestionView>,
    ) -> Option<Action> {
        let InputEvent::KeyPressed(key) = event;
        let action = match state {
            QuizState::NotStarted => Self::translate_not_started(*key),
            QuizState::InProgress { .. } => view.and_then(|view| Self::translate_in_progress(*key, view)),
            QuizState::Completed => Self::translate_completed(*key),
        };
        trace!(target: "terminal", "{:?} in state {} -> {:?}", key, state, action);
        action
    }

    fn translate_not_started(key: Key) -> Option<Action> {
        match key {
            Key::Enter | Key::Char('i') => Some(Action::Command(QuizCommand::Start)),
            key => Self::translate_global(key),
        }
    }

    fn translate_in_progress(key: Key, view: &QuestionView) -> Option<Action> {
        match key {
            Key::ArrowLeft => Some(Action::Command(QuizCommand::Previous)),
            Key::ArrowRight => Some(Action::Command(QuizCommand::Next)),
            Key::Enter if view.navigation.shows_finish => {
                Some(Action::Command(QuizCommand::Finish))
            }
            Key::Enter => Some(Action::Command(QuizCommand::Next)),
            Key::Digit(digit) => {
                // digits only cover the options this question has
                let option_index = (digit as usize).checked_sub(1)?;
                (option_index < view.options.len())
                    .then_some(Action::Command(QuizCommand::SelectOption(option_index)))
            }
            Key::Char('f') => Some(Action::Command(QuizCommand::Finish)),
            key => Self::translate_global(key),
        }
    }

    /// Navigation and option keys are inert once the quiz is over.
    fn translate_completed(key: Key) -> Option<Action> {
        match key {
            Key::Char('r') => Some(Action::Command(QuizCommand::Retake)),
            Key::Char('s') => Some(Action::Command(QuizCommand::Share)),
            key => Self::translate_global(key),
        }
    }

    fn translate_global(key: Key) -> Option<Action> {
        match key {
            Key::Char('h') => Some(Action::ShowHistory),
            Key::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }
}
