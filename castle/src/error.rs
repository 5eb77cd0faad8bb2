use std::io;

use compiler::error::CompilerError;
use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CastleError {
    #[error(transparent)]
    Parse(#[from] CompilerError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
}
