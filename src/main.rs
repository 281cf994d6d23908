use clap::Parser;
use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use republic_quiz::events::Channel;
use republic_quiz::model::{QuestionSet, QuizEngineEvent};
use republic_quiz::quiz::{proclamation_quiz, QuizEngine, Settings};
use republic_quiz::services::{JsonFileStore, LiveRegion, NotificationQueue, QuizServices};
use republic_quiz::terminal::{TerminalApp, TerminalView};
use republic_quiz::QuizError;

#[derive(Parser, Debug)]
#[command(name = "republic-quiz", version, about = "Quiz: Proclamação da República")]
struct Args {
    /// Directory for settings and stored results
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// JSON question set to use instead of the built-in quiz
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Print stored results and exit
    #[arg(long)]
    history: bool,
}

fn init_logging() {
    env_logger::init();
}

fn build_app(args: &Args) -> Result<TerminalApp, QuizError> {
    let data_dir = Settings::resolve_data_dir(args.data_dir.clone());
    info!("Using data directory {}", data_dir.display());
    let settings = Settings::load(&data_dir);

    let question_set = match &args.questions {
        Some(path) => QuestionSet::from_json_file(path)?,
        None => proclamation_quiz(),
    };

    let live_region = Rc::new(LiveRegion::new());
    let notifications = Rc::new(NotificationQueue::new());
    let services = QuizServices::new(
        notifications.clone(),
        live_region.clone(),
        Rc::new(JsonFileStore::new(&data_dir)),
    );

    let (quiz_engine_event_emitter, quiz_engine_event_observer) =
        Channel::<QuizEngineEvent>::new();
    let view = TerminalView::new(
        &quiz_engine_event_observer,
        live_region,
        notifications,
        settings.show_explanations,
    );
    let engine = QuizEngine::new(question_set, services, settings, quiz_engine_event_emitter)?;
    Ok(TerminalApp::new(engine, view))
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let mut app = match build_app(&args) {
        Ok(app) => app,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let outcome = if args.history {
        app.show_history(&mut output)
    } else {
        app.run(io::stdin().lock(), &mut output)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Terminal I/O failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
