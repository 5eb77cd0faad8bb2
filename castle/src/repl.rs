use std::io::Write;

use compiler::token::LexemeKind;
use rustyline::{error::ReadlineError, history::FileHistory};
use tracing::debug;

use crate::{
    driver::{render, Output},
    error::CastleError,
};

#[derive(Debug, PartialEq)]
pub enum IterStatus {
    Continue,
    Break,
}

pub struct Repl {
    prompt: String,
    editor: rustyline::Editor<(), FileHistory>,
    out: Box<dyn Write>,
    buffer: String,
    output: Output,
}

impl Repl {
    pub fn new(output: Output) -> Result<Self, CastleError> {
        Ok(Repl {
            out: Box::new(std::io::stdout()),
            editor: rustyline::DefaultEditor::new()?,
            prompt: "> ".into(),
            buffer: String::new(),
            output,
        })
    }

    fn iter(&mut self) -> Result<IterStatus, CastleError> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    return Ok(IterStatus::Continue);
                }

                self.editor.add_history_entry(line.trim())?;
                self.handle_line(&line)
            }
            Err(ReadlineError::Interrupted) => {
                writeln!(&mut self.out, "SIGINT received; exiting...")?;
                Ok(IterStatus::Break)
            }
            Err(ReadlineError::Eof) => Ok(IterStatus::Break),
            Err(err) => {
                writeln!(&mut self.out, "Error: {err:?}")?;
                Ok(IterStatus::Continue)
            }
        }
    }

    fn process_buffer(&mut self) -> Result<IterStatus, CastleError> {
        if self.buffer.trim() == "quit;" {
            return Ok(IterStatus::Break);
        }

        debug!(bytes = self.buffer.len(), "parsing buffer");
        match render(&self.buffer, self.output) {
            Ok(rendered) => write!(&mut self.out, "{}", rendered)?,
            Err(e) => writeln!(&mut self.out, "{}", e)?,
        }

        Ok(IterStatus::Continue)
    }

    /// Buffers lines until the brace lexemes balance and the last lexeme
    /// closes a statement or block, then parses everything buffered so far.
    pub fn handle_line(&mut self, line: &str) -> Result<IterStatus, CastleError> {
        self.buffer.push_str(line);

        let lexemes = compiler::tokenize(&self.buffer);
        let open = lexemes
            .iter()
            .filter(|l| l.kind == LexemeKind::LeftBrace)
            .count();
        let closed = lexemes
            .iter()
            .filter(|l| l.kind == LexemeKind::RightBrace)
            .count();
        let last = lexemes
            .iter()
            .rev()
            .find(|l| l.kind != LexemeKind::End)
            .map(|l| l.kind);

        if open <= closed
            && matches!(last, Some(LexemeKind::Semicolon | LexemeKind::RightBrace))
        {
            let status = self.process_buffer()?;
            self.buffer.clear();
            return Ok(status);
        }

        self.buffer.push('\n');
        Ok(IterStatus::Continue)
    }

    pub fn run(&mut self) -> Result<(), CastleError> {
        while self.iter()? == IterStatus::Continue {}
        Ok(())
    }
}
