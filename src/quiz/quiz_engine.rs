use log::{debug, info, trace, warn};
use std::rc::Rc;
use std::time::Duration;

use super::history::ResultHistory;
use super::messages;
use super::settings::Settings;
use crate::error::QuizError;
use crate::events::EventEmitter;
use crate::model::{
    Answers, NavigationState, NotificationKind, PerformanceTier, QuestionBreakdown, QuestionSet,
    QuestionView, QuizCommand, QuizEngineEvent, QuizResult, QuizSession, QuizState, ResultsView,
};
use crate::services::QuizServices;

/// Number of positions whose recorded answer matches the question's correct option.
/// Unanswered positions never count.
pub fn count_correct(question_set: &QuestionSet, answers: &Answers) -> usize {
    question_set
        .questions
        .iter()
        .enumerate()
        .filter(|(position, question)| question.is_correct(answers.get(position).copied()))
        .count()
}

fn in_progress(
    session: &mut Option<QuizSession>,
    command: QuizCommand,
) -> Result<&mut QuizSession, QuizError> {
    match session {
        Some(session) if !session.completed => Ok(session),
        Some(_) => Err(QuizError::invalid_transition(
            command.name(),
            QuizState::Completed,
        )),
        None => Err(QuizError::invalid_transition(
            command.name(),
            QuizState::NotStarted,
        )),
    }
}

pub struct QuizEngine {
    question_set: Rc<QuestionSet>,
    session: Option<QuizSession>,
    last_result: Option<QuizResult>,
    history: ResultHistory,
    services: QuizServices,
    settings: Settings,
    quiz_engine_event_emitter: EventEmitter<QuizEngineEvent>,
}

impl QuizEngine {
    pub fn new(
        question_set: QuestionSet,
        services: QuizServices,
        settings: Settings,
        quiz_engine_event_emitter: EventEmitter<QuizEngineEvent>,
    ) -> Result<Self, QuizError> {
        question_set.validate()?;
        Ok(Self {
            question_set: Rc::new(question_set),
            session: None,
            last_result: None,
            history: ResultHistory::new(Rc::clone(&services.store)),
            services,
            settings,
            quiz_engine_event_emitter,
        })
    }

    pub fn state(&self) -> QuizState {
        match &self.session {
            None => QuizState::NotStarted,
            Some(session) if session.completed => QuizState::Completed,
            Some(session) => QuizState::InProgress {
                position: session.current_index,
            },
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state() == QuizState::Completed
    }

    pub fn question_set(&self) -> &QuestionSet {
        &self.question_set
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn last_result(&self) -> Option<&QuizResult> {
        self.last_result.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn handle_command(&mut self, command: QuizCommand) -> Result<(), QuizError> {
        trace!(target: "quiz_engine", "Handling command: {:?}", command);
        match command {
            QuizCommand::Start => self.start(),
            QuizCommand::SelectOption(option_index) => self.select_option(option_index),
            QuizCommand::Next => self.next(),
            QuizCommand::Previous => self.previous(),
            QuizCommand::Finish => self.finish().map(|_| ()),
            QuizCommand::Retake => self.retake(),
            QuizCommand::Share => self.share().map(|_| ()),
        }
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        let state = self.state();
        if state != QuizState::NotStarted {
            return Err(QuizError::invalid_transition(
                QuizCommand::Start.name(),
                state,
            ));
        }
        self.begin_session();
        self.announce(messages::QUIZ_STARTED);
        Ok(())
    }

    /// Starts over with a brand-new session; the completed one is left untouched.
    pub fn retake(&mut self) -> Result<(), QuizError> {
        let state = self.state();
        if state != QuizState::Completed {
            return Err(QuizError::invalid_transition(
                QuizCommand::Retake.name(),
                state,
            ));
        }
        self.begin_session();
        self.announce(messages::QUIZ_RESTARTED);
        Ok(())
    }

    fn begin_session(&mut self) {
        let session = QuizSession::new(self.services.clock.now());
        info!(
            target: "quiz_engine",
            "Starting session {} with {} questions",
            session.session_id,
            self.question_set.len()
        );
        self.session = Some(session);
        self.emit_question_view(QuizEngineEvent::QuestionChanged);
    }

    /// Records `option_index` for the current position, replacing any earlier answer.
    pub fn select_option(&mut self, option_index: usize) -> Result<(), QuizError> {
        let question_set = Rc::clone(&self.question_set);
        let session = in_progress(
            &mut self.session,
            QuizCommand::SelectOption(option_index),
        )?;
        let position = session.current_index;
        let Some(question) = question_set.get(position) else {
            return Err(QuizError::invalid_transition(
                QuizCommand::SelectOption(option_index).name(),
                QuizState::InProgress { position },
            ));
        };
        let Some(option_text) = question.option_text(option_index) else {
            return Err(QuizError::InvalidOptionIndex {
                index: option_index,
                option_count: question.option_count(),
            });
        };

        session.answers.insert(position, option_index);
        debug!(
            target: "quiz_engine",
            "Question {} answered with option {}",
            question.id,
            option_index
        );

        self.announce(&messages::option_selected(option_text));
        self.emit_question_view(QuizEngineEvent::SelectionChanged);
        Ok(())
    }

    /// Moves forward one question. A no-op on the last question.
    pub fn next(&mut self) -> Result<(), QuizError> {
        let last_position = self.question_set.last_position();
        let session = in_progress(&mut self.session, QuizCommand::Next)?;
        if session.current_index >= last_position {
            trace!(target: "quiz_engine", "Already at the last question");
            return Ok(());
        }
        session.current_index += 1;
        let position = session.current_index;
        self.after_move(position);
        Ok(())
    }

    /// Moves back one question. A no-op on the first question.
    pub fn previous(&mut self) -> Result<(), QuizError> {
        let session = in_progress(&mut self.session, QuizCommand::Previous)?;
        if session.current_index == 0 {
            trace!(target: "quiz_engine", "Already at the first question");
            return Ok(());
        }
        session.current_index -= 1;
        let position = session.current_index;
        self.after_move(position);
        Ok(())
    }

    fn after_move(&mut self, position: usize) {
        self.emit_question_view(QuizEngineEvent::QuestionChanged);
        if let Some(question) = self.question_set.get(position) {
            self.announce(&messages::question_announcement(position, &question.prompt));
        }
    }

    /// Scores the session from whatever answers exist, at any position.
    /// Storage trouble is logged and never fails the finish.
    pub fn finish(&mut self) -> Result<QuizResult, QuizError> {
        let now = self.services.clock.now();
        let total = self.question_set.len();
        let session = in_progress(&mut self.session, QuizCommand::Finish)?;

        session.timer_state = session.timer_state.ended(now);
        session.completed = true;
        let correct_count = count_correct(&self.question_set, &session.answers);
        let result = QuizResult::new(
            session.session_id,
            correct_count,
            total,
            Duration::from_secs(session.timer_state.elapsed_seconds(now)),
            now,
            session.answers.clone(),
        );
        info!(
            target: "quiz_engine",
            "Session {} finished: {}/{} correct, score {}%, {}s",
            result.session_id(),
            correct_count,
            total,
            result.score(),
            result.time_spent_seconds()
        );

        self.last_result = Some(result.clone());
        self.save_result(&result);

        if let Some(results) = self.results_view() {
            self.quiz_engine_event_emitter
                .emit(QuizEngineEvent::QuizCompleted {
                    results,
                    result: result.clone(),
                });
        }
        self.announce(&messages::quiz_finished(
            correct_count,
            total,
            result.score(),
        ));
        Ok(result)
    }

    /// Builds the share sentence for the completed session and tells the user it is ready.
    pub fn share(&self) -> Result<String, QuizError> {
        let result = match (self.state(), &self.last_result) {
            (QuizState::Completed, Some(result)) => result,
            (state, _) => {
                return Err(QuizError::invalid_transition(
                    QuizCommand::Share.name(),
                    state,
                ))
            }
        };
        let text = messages::share_text(
            &self.question_set.title,
            result.correct_count(),
            result.total(),
            result.score(),
        );
        self.services.notifier.notify(
            messages::SHARE_COPIED,
            NotificationKind::Success,
            self.settings.notification_duration(),
        );
        self.quiz_engine_event_emitter
            .emit(QuizEngineEvent::ResultShared(text.clone()));
        Ok(text)
    }

    /// Appends to the bounded history. Failures become a background warning.
    pub fn save_result(&self, result: &QuizResult) {
        if let Err(err) = self.persist_result(result) {
            warn!(target: "history", "Failed to save quiz result: {}", err);
        }
    }

    fn persist_result(&self, result: &QuizResult) -> Result<(), QuizError> {
        self.history.save_result(result)?;
        Ok(())
    }

    /// Stored results, oldest first. Unreadable storage reads as empty.
    pub fn history(&self) -> Vec<QuizResult> {
        match self.history.load() {
            Ok(results) => results,
            Err(err) => {
                warn!(target: "history", "Failed to read quiz history: {}", err);
                Vec::new()
            }
        }
    }

    pub fn current_question_view(&self) -> Option<QuestionView> {
        let session = self.session.as_ref().filter(|s| !s.completed)?;
        let position = session.current_index;
        let question = self.question_set.get(position)?;
        let total = self.question_set.len();
        Some(QuestionView {
            question_id: question.id,
            question_text: question.prompt.clone(),
            options: question.options.clone(),
            selected_index: session.answer_at(position),
            position,
            total,
            navigation: NavigationState::at(position, total),
        })
    }

    pub fn results_view(&self) -> Option<ResultsView> {
        let session = self.session.as_ref().filter(|s| s.completed)?;
        let result = self.last_result.as_ref()?;
        let per_question_breakdown = self
            .question_set
            .questions
            .iter()
            .enumerate()
            .map(|(position, question)| {
                let answer = session.answer_at(position);
                QuestionBreakdown {
                    question_text: question.prompt.clone(),
                    user_option_text: answer
                        .and_then(|index| question.option_text(index))
                        .map(str::to_string),
                    correct_option_text: question.correct_option_text().to_string(),
                    explanation: question.explanation.clone(),
                    was_correct: question.is_correct(answer),
                }
            })
            .collect();
        Some(ResultsView {
            score: result.score(),
            correct_count: result.correct_count(),
            total: result.total(),
            time_spent: result.time_spent(),
            performance: PerformanceTier::from_score(result.score()),
            per_question_breakdown,
        })
    }

    fn emit_question_view(&self, event: fn(QuestionView) -> QuizEngineEvent) {
        if let Some(view) = self.current_question_view() {
            self.quiz_engine_event_emitter.emit(event(view));
        }
    }

    fn announce(&self, message: &str) {
        if self.settings.announcements_enabled {
            self.services.announcer.announce(message);
        }
    }
}
