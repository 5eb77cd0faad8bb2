use error::CompilerError;
use lexer::Lexer;
use parser::Parser;
use stmt::Program;
use token::Lexeme;

pub mod error;
pub mod expr;
mod lexer;
mod parser;
pub mod pos;
pub mod printer;
mod scanner;
pub mod stmt;
pub mod token;

pub fn tokenize(buf: &str) -> Vec<Lexeme> {
    Lexer::new(buf).tokenize()
}

pub fn parse(buf: &str) -> Result<Program, CompilerError> {
    parse_lexemes(tokenize(buf))
}

pub fn parse_lexemes(lexemes: Vec<Lexeme>) -> Result<Program, CompilerError> {
    Parser::new(lexemes).parse()
}
