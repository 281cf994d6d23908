use log::{error, trace};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use super::input_translator::{parse_line, Action, InputTranslator};
use super::renderer;
use super::terminal_view::TerminalView;
use crate::quiz::QuizEngine;

/// Line-oriented front end: one line of input is one key press.
pub struct TerminalApp {
    engine: QuizEngine,
    view: Rc<RefCell<TerminalView>>,
}

impl TerminalApp {
    pub fn new(engine: QuizEngine, view: Rc<RefCell<TerminalView>>) -> Self {
        Self { engine, view }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn show_history<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        let frame = renderer::render_history(&self.engine.history());
        self.view.borrow_mut().push_frame(frame);
        self.flush(output)
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        let question_set = self.engine.question_set();
        let intro = renderer::render_intro(&question_set.title, &question_set.description);
        self.view.borrow_mut().push_frame(intro);
        self.flush(output)?;

        for line in input.lines() {
            let line = line?;
            let Some(event) = parse_line(&line) else {
                trace!(target: "terminal", "Ignoring input {:?}", line);
                continue;
            };
            let current_view = self.engine.current_question_view();
            match InputTranslator::translate(&event, self.engine.state(), current_view.as_ref())
            {
                Some(Action::Quit) => break,
                Some(Action::ShowHistory) => {
                    let frame = renderer::render_history(&self.engine.history());
                    self.view.borrow_mut().push_frame(frame);
                }
                Some(Action::Command(command)) => {
                    // the translator only produces commands valid for the current state
                    if let Err(err) = self.engine.handle_command(command) {
                        error!(target: "terminal", "Command {:?} rejected: {}", command, err);
                    }
                }
                None => trace!(target: "terminal", "No action for {:?}", event),
            }
            self.flush(output)?;
        }

        self.view.borrow_mut().detach();
        Ok(())
    }

    fn flush<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        for block in self.view.borrow_mut().take_output() {
            writeln!(output, "{}\n", block)?;
        }
        output.flush()
    }
}
