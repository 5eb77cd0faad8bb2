//! Castle front end driver.
//!
//! Usage: `castle -c <file> [-c <file> ...] [--tokens | --quiet]`
//!
//! With no files an interactive prompt is started instead.

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use driver::{compile_file, Output};
use repl::Repl;

mod driver;
mod error;
mod repl;

#[derive(Parser, Debug)]
#[command(name = "castle")]
#[command(about = "Tokenize and parse Castle sources, printing the syntax tree")]
struct Args {
    /// Source file to parse; may be given more than once
    #[arg(short = 'c', long = "compile", value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Print the lexeme stream instead of the syntax tree
    #[arg(long, conflicts_with = "quiet")]
    tokens: bool,

    /// Parse only; print nothing on success
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn output(&self) -> Output {
        if self.tokens {
            Output::Tokens
        } else if self.quiet {
            Output::Quiet
        } else {
            Output::Tree
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,compiler=info,castle=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();
    let output = args.output();

    if args.files.is_empty() {
        return match Repl::new(output).and_then(|mut repl| repl.run()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut failed = 0;
    for file in &args.files {
        match compile_file(file, output) {
            Ok(rendered) => print!("{}", rendered),
            Err(e) => {
                error!(file = %file.display(), "{}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        error!("{} of {} files failed", failed, args.files.len());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
