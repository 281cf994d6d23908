use chrono::{TimeDelta, TimeZone, Utc};
use std::rc::Rc;

use republic_quiz::error::StoreError;
use republic_quiz::events::Channel;
use republic_quiz::model::{QuizEngineEvent, QuizResult, QuizState};
use republic_quiz::quiz::{proclamation_quiz, QuizEngine, Settings, HISTORY_KEY};
use republic_quiz::services::{
    JsonFileStore, KeyValueStore, LiveRegion, ManualClock, MemoryStore, NotificationQueue,
    QuizServices,
};
use republic_quiz::QuizError;

const CORRECT: [usize; 10] = [1, 2, 1, 1, 1, 1, 2, 2, 1, 2];

/// A store whose every operation fails, standing in for blocked storage.
struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }

    fn set(&self, _key: &str, _value: serde_json::Value) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".into()))
    }
}

struct Fixture {
    engine: QuizEngine,
    store: Rc<MemoryStore>,
    clock: Rc<ManualClock>,
    live_region: Rc<LiveRegion>,
}

fn engine_with_store(store: Rc<dyn KeyValueStore>, clock: Rc<ManualClock>) -> QuizEngine {
    let services = QuizServices::new(
        Rc::new(NotificationQueue::new()),
        Rc::new(LiveRegion::new()),
        store,
    )
    .with_clock(clock);
    let (emitter, _observer) = Channel::<QuizEngineEvent>::new();
    QuizEngine::new(proclamation_quiz(), services, Settings::default(), emitter).unwrap()
}

fn fixture() -> Fixture {
    let store = Rc::new(MemoryStore::new());
    let clock = Rc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 11, 15, 9, 0, 0).unwrap(),
    ));
    let live_region = Rc::new(LiveRegion::new());
    let services = QuizServices::new(
        Rc::new(NotificationQueue::new()),
        live_region.clone(),
        store.clone(),
    )
    .with_clock(clock.clone());
    let (emitter, _observer) = Channel::<QuizEngineEvent>::new();
    let engine =
        QuizEngine::new(proclamation_quiz(), services, Settings::default(), emitter).unwrap();
    Fixture {
        engine,
        store,
        clock,
        live_region,
    }
}

fn assert_position_invariant(engine: &QuizEngine) {
    if let QuizState::InProgress { position } = engine.state() {
        assert!(position < engine.question_set().len());
    }
}

#[test]
fn all_correct_scores_100() {
    let mut f = fixture();
    f.engine.start().unwrap();
    for (position, correct) in CORRECT.iter().enumerate() {
        f.engine.select_option(*correct).unwrap();
        if position < CORRECT.len() - 1 {
            f.engine.next().unwrap();
        }
        assert_position_invariant(&f.engine);
    }

    let result = f.engine.finish().unwrap();
    assert_eq!(result.score(), 100);
    assert_eq!(result.correct_count(), 10);
    let view = f.engine.results_view().unwrap();
    assert!(view.per_question_breakdown.iter().all(|b| b.was_correct));
}

#[test]
fn all_wrong_scores_0() {
    let mut f = fixture();
    f.engine.start().unwrap();
    for position in 0..CORRECT.len() {
        // every correct index is non-zero, so option 0 is always wrong
        f.engine.select_option(0).unwrap();
        if position < CORRECT.len() - 1 {
            f.engine.next().unwrap();
        }
    }

    let result = f.engine.finish().unwrap();
    assert_eq!(result.score(), 0);
    assert_eq!(result.correct_count(), 0);
    assert_eq!(result.answers().len(), 10);
}

#[test]
fn half_answered_half_skipped_scores_50() {
    let mut f = fixture();
    f.engine.start().unwrap();
    for position in 0..CORRECT.len() {
        if position < 5 {
            f.engine.select_option(CORRECT[position]).unwrap();
        }
        f.engine.next().unwrap();
    }
    assert_eq!(f.engine.state(), QuizState::InProgress { position: 9 });

    let result = f.engine.finish().unwrap();
    assert_eq!(result.correct_count(), 5);
    assert_eq!(result.score(), 50);
    let view = f.engine.results_view().unwrap();
    assert!(view.per_question_breakdown[5..]
        .iter()
        .all(|b| b.user_option_text.is_none() && !b.was_correct));
}

#[test]
fn invalid_selection_is_rejected() {
    let mut f = fixture();
    f.engine.start().unwrap();
    f.engine.select_option(2).unwrap();

    let err = f.engine.select_option(4).unwrap_err();
    assert!(matches!(
        err,
        QuizError::InvalidOptionIndex {
            index: 4,
            option_count: 4
        }
    ));
    assert_eq!(f.engine.session().unwrap().answer_at(0), Some(2));
    assert_eq!(f.engine.session().unwrap().answered_count(), 1);
}

#[test]
fn finish_from_any_position() {
    let mut f = fixture();
    f.engine.start().unwrap();
    for position in 0..3 {
        f.engine.select_option(CORRECT[position]).unwrap();
        f.engine.next().unwrap();
    }
    assert_eq!(f.engine.state(), QuizState::InProgress { position: 3 });

    let result = f.engine.finish().unwrap();
    assert_eq!(f.engine.state(), QuizState::Completed);
    assert_eq!(result.correct_count(), 3);
    assert_eq!(result.score(), 30);
}

#[test]
fn reselecting_the_same_option_is_idempotent() {
    let mut f = fixture();
    f.engine.start().unwrap();
    f.engine.select_option(3).unwrap();
    let once = f.engine.session().unwrap().answers.clone();
    f.engine.select_option(3).unwrap();
    assert_eq!(f.engine.session().unwrap().answers, once);
}

#[test]
fn boundary_navigation_leaves_state_unchanged() {
    let mut f = fixture();
    f.engine.start().unwrap();
    f.engine.select_option(1).unwrap();
    let before = f.engine.session().unwrap().clone();

    f.engine.previous().unwrap();
    let after = f.engine.session().unwrap();
    assert_eq!(after.current_index, before.current_index);
    assert_eq!(after.answers, before.answers);

    for _ in 0..20 {
        f.engine.next().unwrap();
        assert_position_invariant(&f.engine);
    }
    assert_eq!(f.engine.state(), QuizState::InProgress { position: 9 });
}

#[test]
fn time_spent_uses_rounded_seconds() {
    let mut f = fixture();
    f.engine.start().unwrap();
    f.clock.advance(TimeDelta::milliseconds(95_499));
    let result = f.engine.finish().unwrap();

    assert_eq!(result.time_spent_seconds(), 95);
    assert_eq!(
        result.completed_at(),
        Utc.with_ymd_and_hms(2024, 11, 15, 9, 1, 35).unwrap() + TimeDelta::milliseconds(499)
    );
}

#[test]
fn history_keeps_the_ten_most_recent_results() {
    let mut f = fixture();
    let mut saved: Vec<QuizResult> = Vec::new();
    f.engine.start().unwrap();
    for round in 0..11 {
        for _ in 0..(round % 10) {
            f.engine.next().unwrap();
        }
        f.engine.select_option(0).unwrap();
        f.clock.advance(TimeDelta::seconds(10));
        saved.push(f.engine.finish().unwrap());
        f.engine.retake().unwrap();
    }

    let history = f.engine.history();
    assert_eq!(history.len(), 10);
    assert_eq!(history, saved[1..].to_vec());

    let stored: Vec<QuizResult> =
        serde_json::from_value(f.store.get(HISTORY_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored, saved[1..].to_vec());
}

#[test]
fn save_result_evicts_oldest_first() {
    let f = fixture();
    let results: Vec<QuizResult> = (0..11)
        .map(|i| {
            let mut answers = republic_quiz::model::Answers::new();
            answers.insert(0, i % 4);
            QuizResult::new(
                uuid::Uuid::new_v4(),
                i,
                10,
                std::time::Duration::from_secs(i as u64),
                Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + TimeDelta::minutes(i as i64),
                answers,
            )
        })
        .collect();
    for result in &results {
        f.engine.save_result(result);
    }

    assert_eq!(f.engine.history(), results[1..].to_vec());
}

#[test]
fn retake_produces_an_independent_session() {
    let mut f = fixture();
    f.engine.start().unwrap();
    f.engine.select_option(1).unwrap();
    f.engine.next().unwrap();
    let first = f.engine.finish().unwrap();
    let first_started = f.engine.session().unwrap().started_at();

    f.engine.retake().unwrap();
    let session = f.engine.session().unwrap();
    assert!(session.answers.is_empty());
    assert_eq!(session.current_index, 0);
    assert!(!session.completed);
    assert!(session.started_at() >= first_started);
    assert_eq!(first.answers().len(), 1);
    assert_eq!(
        f.live_region.last().as_deref(),
        Some("Quiz reiniciado. Primeira pergunta carregada.")
    );
}

#[test]
fn unavailable_storage_never_breaks_finish() {
    let clock = Rc::new(ManualClock::new(Utc::now()));
    let mut engine = engine_with_store(Rc::new(UnavailableStore), clock);
    engine.start().unwrap();
    engine.select_option(1).unwrap();

    let result = engine.finish().unwrap();
    assert_eq!(result.correct_count(), 1);
    assert!(engine.is_completed());
    assert!(engine.results_view().is_some());
    assert!(engine.history().is_empty());
}

#[test]
fn malformed_history_file_is_replaced_on_finish() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("{}.json", HISTORY_KEY));
    std::fs::write(&path, "{not json").unwrap();
    let clock = Rc::new(ManualClock::new(Utc::now()));
    let mut engine = engine_with_store(Rc::new(JsonFileStore::new(dir.path())), clock);

    assert!(engine.history().is_empty());
    engine.start().unwrap();
    let result = engine.finish().unwrap();

    assert_eq!(engine.history(), vec![result]);
    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored.as_array().map(Vec::len), Some(1));
}
