mod app;
pub mod input_translator;
pub mod renderer;
mod terminal_view;

pub use app::TerminalApp;
pub use input_translator::{parse_line, Action, InputTranslator};
pub use terminal_view::TerminalView;
