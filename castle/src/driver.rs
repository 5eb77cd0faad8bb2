use std::{fs, path::Path};

use compiler::{
    error::CompilerError,
    printer::{print_lexemes, print_program},
};
use tracing::{debug, info};

use crate::error::CastleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Tree,
    Tokens,
    Quiet,
}

/// Runs the front end over one source text and renders the result.
pub fn render(source: &str, output: Output) -> Result<String, CompilerError> {
    match output {
        Output::Tokens => Ok(print_lexemes(&compiler::tokenize(source))),
        Output::Tree => Ok(print_program(&compiler::parse(source)?)),
        Output::Quiet => compiler::parse(source).map(|_| String::new()),
    }
}

pub fn compile_file(path: &Path, output: Output) -> Result<String, CastleError> {
    let source = fs::read_to_string(path)?;
    debug!(file = %path.display(), bytes = source.len(), "loaded source");

    let rendered = render(&source, output)?;
    info!(file = %path.display(), "parsed");

    Ok(rendered)
}
