use std::cell::RefCell;
use std::rc::Rc;

use super::renderer;
use crate::events::{EventHandler, EventObserver, Unsubscriber};
use crate::model::QuizEngineEvent;
use crate::services::{LiveRegion, NotificationQueue};

/// Renders engine events into text frames and collects announcements and
/// notifications until the terminal loop flushes them.
pub struct TerminalView {
    frames: Vec<String>,
    show_explanations: bool,
    live_region: Rc<LiveRegion>,
    notifications: Rc<NotificationQueue>,
    subscription: Option<Unsubscriber<QuizEngineEvent>>,
}

impl TerminalView {
    pub fn new(
        quiz_engine_event_observer: &EventObserver<QuizEngineEvent>,
        live_region: Rc<LiveRegion>,
        notifications: Rc<NotificationQueue>,
        show_explanations: bool,
    ) -> Rc<RefCell<Self>> {
        let view = Rc::new(RefCell::new(Self {
            frames: Vec::new(),
            show_explanations,
            live_region,
            notifications,
            subscription: None,
        }));
        TerminalView::bind_observer(view.clone(), quiz_engine_event_observer);
        view
    }

    fn bind_observer(
        view: Rc<RefCell<Self>>,
        quiz_engine_event_observer: &EventObserver<QuizEngineEvent>,
    ) {
        let subscription = {
            let view = view.clone();
            quiz_engine_event_observer.subscribe(move |event| {
                view.borrow_mut().handle_event(event);
            })
        };
        view.borrow_mut().subscription = Some(subscription);
    }

    pub fn push_frame(&mut self, frame: String) {
        self.frames.push(frame);
    }

    /// Everything rendered since the last call, frames first, then
    /// notifications and announcements.
    pub fn take_output(&mut self) -> Vec<String> {
        let mut output: Vec<String> = self.frames.drain(..).collect();
        output.extend(
            self.notifications
                .drain()
                .iter()
                .map(renderer::render_notification),
        );
        output.extend(
            self.live_region
                .drain()
                .iter()
                .map(|message| renderer::render_announcement(message)),
        );
        output
    }

    /// Stops listening; the view keeps what it already rendered.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl EventHandler<QuizEngineEvent> for TerminalView {
    fn handle_event(&mut self, event: &QuizEngineEvent) {
        match event {
            QuizEngineEvent::QuestionChanged(view) | QuizEngineEvent::SelectionChanged(view) => {
                self.frames.push(renderer::render_question(view));
            }
            QuizEngineEvent::QuizCompleted { results, .. } => {
                self.frames
                    .push(renderer::render_results(results, self.show_explanations));
            }
            QuizEngineEvent::ResultShared(text) => self.frames.push(text.clone()),
        }
    }
}
